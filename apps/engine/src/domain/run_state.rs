//! Per-player run state containers.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::cards::{CardCounts, CardSelection};
use crate::domain::direction::Direction;
use crate::errors::engine::EngineError;
use crate::oracle::OracleHandle;

/// Opaque player identity. The host keys persisted records and ledger
/// accounts by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed move awaiting its oracle reveal.
///
/// Created by commit, consumed by reveal whether the reveal succeeds or
/// fails fatally. At most one exists per player at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMove {
    pub guessed: Direction,
    pub cards: CardSelection,
    pub handle: OracleHandle,
    /// Epoch the commitment was made under. A reveal after the epoch turned
    /// over fails StaleEpoch.
    pub committed_epoch: u64,
    pub committed_at: OffsetDateTime,
}

/// Entire per-player engine state, sufficient for pure domain operations.
///
/// Created once per player and never destroyed: it persists across epochs,
/// with `position` returning to zero on loss or win.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    pub ciphers: u64,
    pub cards: CardCounts,
    /// Current step along the path, `0..=path_length`.
    pub position: u16,
    pub pending: Option<PendingMove>,
    /// Last epoch this player bought into or committed under.
    pub joined_epoch: Option<u64>,

    // Lifetime counters
    pub total_ciphers_bought: u64,
    pub games_won: u32,
    pub consecutive_wins: u32,
    pub best_win_streak: u32,
    pub best_position: u16,
    pub total_resets: u32,
    pub shields_used: u32,
    pub system_breaches: u32,

    pub last_activity: OffsetDateTime,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            ciphers: 0,
            cards: CardCounts::default(),
            position: 0,
            pending: None,
            joined_epoch: None,
            total_ciphers_bought: 0,
            games_won: 0,
            consecutive_wins: 0,
            best_win_streak: 0,
            best_position: 0,
            total_resets: 0,
            shields_used: 0,
            system_breaches: 0,
            last_activity: OffsetDateTime::now_utc(),
        }
    }

    /// Stamp the activity clock after a mutation.
    pub fn touch(&mut self) {
        self.last_activity = OffsetDateTime::now_utc();
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn require_pending(run: &RunState) -> Result<&PendingMove, EngineError> {
    run.pending.as_ref().ok_or(EngineError::NoPendingMove)
}
