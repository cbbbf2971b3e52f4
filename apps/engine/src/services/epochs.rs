//! Epoch lifecycle service.

use tracing::info;

use crate::domain::epoch::Epoch;
use crate::errors::engine::EngineError;
use crate::state::engine_state::EngineState;

/// Epoch administration: one-time game initialization and epoch reads.
pub struct EpochService;

impl EpochService {
    pub fn new() -> Self {
        Self
    }

    /// Create the first epoch. Admin operation, once per deployment.
    pub async fn initialize_game(&self, state: &EngineState) -> Result<Epoch, EngineError> {
        let mut epoch = state.epoch.lock().await;
        if epoch.is_some() {
            return Err(EngineError::GameAlreadyInitialized);
        }

        let created = Epoch::first(state.config.initial_path_length);
        info!(
            epoch_no = created.epoch_no,
            path_length = created.path_length,
            "Game initialized"
        );
        *epoch = Some(created.clone());
        Ok(created)
    }

    /// Snapshot of the current epoch.
    pub async fn current(&self, state: &EngineState) -> Result<Epoch, EngineError> {
        state
            .epoch
            .lock()
            .await
            .clone()
            .ok_or(EngineError::GameNotInitialized)
    }
}
