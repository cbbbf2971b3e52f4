//! Player lifecycle service.

use dashmap::mapref::entry::Entry;
use tracing::info;

use crate::domain::events::{EventKind, FeedEvent};
use crate::domain::run_state::{PlayerId, RunState};
use crate::domain::snapshot::RunSnapshot;
use crate::errors::engine::EngineError;
use crate::state::engine_state::EngineState;

/// Player administration: one-time initialization and snapshot reads.
pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    /// Create a player's run state.
    ///
    /// A second call for the same identity fails without altering the
    /// existing state.
    pub async fn initialize_player(
        &self,
        state: &EngineState,
        player: PlayerId,
    ) -> Result<(), EngineError> {
        if state.epoch.lock().await.is_none() {
            return Err(EngineError::GameNotInitialized);
        }

        match state.players.entry(player) {
            Entry::Occupied(_) => return Err(EngineError::PlayerAlreadyInitialized),
            Entry::Vacant(vacant) => {
                vacant.insert(RunState::new());
            }
        }

        info!(%player, "Player initialized");
        state.feed.lock().append(FeedEvent::global(
            EventKind::Joined,
            format!("runner {player} entered the grid"),
        ));
        Ok(())
    }

    /// Read-model for EventSink consumers and preview reconciliation.
    pub async fn snapshot(
        &self,
        state: &EngineState,
        player: PlayerId,
    ) -> Result<RunSnapshot, EngineError> {
        let epoch = state
            .epoch
            .lock()
            .await
            .clone()
            .ok_or(EngineError::GameNotInitialized)?;
        let run = state
            .players
            .get(&player)
            .ok_or(EngineError::PlayerNotFound)?;
        Ok(RunSnapshot::capture(player, &run, &epoch))
    }
}
