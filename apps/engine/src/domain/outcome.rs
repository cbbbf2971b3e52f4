//! Pure outcome application for a revealed move.
//!
//! The service layer settles external effects (payouts) first; this module
//! then mutates a single player's run state in one shot, so no partial
//! outcome is ever observable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::cards::{CardKind, CardSelection};
use crate::domain::direction::{derive_award_seed, Direction};
use crate::domain::run_state::RunState;

/// What a reveal did to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Correct guess short of the end: position advanced, cards awarded.
    Advanced { position: u16, award: CardAward },
    /// Correct guess on the final step. Player counters are updated here;
    /// the caller pays the pool out and turns the epoch over.
    Won,
    /// Wrong guess absorbed by a Shield: position kept.
    Saved,
    /// Wrong guess with no Shield: run reset to the start.
    Reset,
}

/// Cards granted for a correct step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAward {
    pub kind: CardKind,
    pub count: u32,
}

/// Draw the card award for a correct step from the move's entropy.
///
/// Uniform over the three kinds; a Doubler in the selection doubles the
/// count. Deterministic given the oracle bytes, so any party can re-derive
/// the award from the published reveal.
pub fn draw_award(entropy: &[u8], selection: &CardSelection) -> CardAward {
    let mut rng = ChaCha8Rng::seed_from_u64(derive_award_seed(entropy));
    let kind = CardKind::ALL[rng.random_range(0..CardKind::ALL.len())];
    let count = if selection.contains(CardKind::Doubler) {
        2
    } else {
        1
    };
    CardAward { kind, count }
}

/// Apply a revealed move to the run state.
///
/// `correct` is the direction derived from the oracle entropy and
/// `path_length` comes from the current epoch. Every selected card is spent
/// exactly once; the Shield consumed by a save is not spent twice. The
/// caller clears the pending move and appends feed events.
pub fn apply_reveal(
    run: &mut RunState,
    guessed: Direction,
    selection: &CardSelection,
    correct: Direction,
    path_length: u16,
    entropy: &[u8],
) -> MoveOutcome {
    if guessed == correct {
        for kind in selection.iter() {
            run.cards.remove(kind);
        }
        run.position += 1;
        run.best_position = run.best_position.max(run.position);
        if run.position == path_length {
            run.games_won += 1;
            run.system_breaches += 1;
            run.consecutive_wins += 1;
            run.best_win_streak = run.best_win_streak.max(run.consecutive_wins);
            run.position = 0;
            MoveOutcome::Won
        } else {
            let award = draw_award(entropy, selection);
            run.cards.add(award.kind, award.count);
            MoveOutcome::Advanced {
                position: run.position,
                award,
            }
        }
    } else if selection.contains(CardKind::Shield) {
        // Spending the selection is the shield's consumption.
        for kind in selection.iter() {
            run.cards.remove(kind);
        }
        run.shields_used += 1;
        MoveOutcome::Saved
    } else {
        run.position = 0;
        run.cards.clear();
        run.total_resets += 1;
        run.consecutive_wins = 0;
        MoveOutcome::Reset
    }
}
