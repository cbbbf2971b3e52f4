//! Serializable read-models for EventSink and UI consumers.

use serde::Serialize;

use crate::domain::cards::CardKind;
use crate::domain::epoch::Epoch;
use crate::domain::run_state::{PlayerId, RunState};

/// Point-in-time view of one player's run against the current epoch.
///
/// Non-authoritative presentation data: client-side previews reconcile
/// against this, never the other way around.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSnapshot {
    pub player: PlayerId,
    pub epoch_no: u64,
    pub path_length: u16,
    pub prize_pool: u64,

    pub position: u16,
    pub ciphers: u64,
    pub shield_cards: u32,
    pub doubler_cards: u32,
    pub swift_cards: u32,
    pub move_pending: bool,

    pub total_ciphers_bought: u64,
    pub games_won: u32,
    pub consecutive_wins: u32,
    pub best_win_streak: u32,
    pub best_position: u16,
    pub total_resets: u32,
    pub shields_used: u32,
    pub system_breaches: u32,
}

impl RunSnapshot {
    pub fn capture(player: PlayerId, run: &RunState, epoch: &Epoch) -> Self {
        Self {
            player,
            epoch_no: epoch.epoch_no,
            path_length: epoch.path_length,
            prize_pool: epoch.prize_pool,
            position: run.position,
            ciphers: run.ciphers,
            shield_cards: run.cards.count(CardKind::Shield),
            doubler_cards: run.cards.count(CardKind::Doubler),
            swift_cards: run.cards.count(CardKind::Swift),
            move_pending: run.pending.is_some(),
            total_ciphers_bought: run.total_ciphers_bought,
            games_won: run.games_won,
            consecutive_wins: run.consecutive_wins,
            best_win_streak: run.best_win_streak,
            best_position: run.best_position,
            total_resets: run.total_resets,
            shields_used: run.shields_used,
            system_breaches: run.system_breaches,
        }
    }
}
