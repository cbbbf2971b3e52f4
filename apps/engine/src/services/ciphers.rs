//! Cipher purchase service: the resource economy.

use tracing::info;

use crate::domain::events::{EventKind, FeedEvent};
use crate::domain::run_state::PlayerId;
use crate::errors::engine::EngineError;
use crate::state::engine_state::EngineState;

/// Cipher economy: purchases fund the shared prize pool.
pub struct CipherService;

impl CipherService {
    pub fn new() -> Self {
        Self
    }

    /// Purchase `amount` ciphers at the configured unit cost.
    ///
    /// The full purchase price routes to the prize pool. The wallet debit
    /// settles first; any failure there leaves the engine untouched.
    /// Returns the player's new cipher balance.
    pub async fn purchase_ciphers(
        &self,
        state: &EngineState,
        player: PlayerId,
        amount: u64,
    ) -> Result<u64, EngineError> {
        if amount == 0 {
            return Err(EngineError::NegativeCiphersAmount);
        }
        if state.epoch.lock().await.is_none() {
            return Err(EngineError::GameNotInitialized);
        }
        if !state.players.contains_key(&player) {
            return Err(EngineError::PlayerNotFound);
        }

        let price = amount.saturating_mul(state.config.unit_cost);
        state.ledger.debit(player, price).await?;

        // Pool first: once the debit has settled, the funds belong to the
        // aggregate before the player sees the ciphers.
        let epoch_no = {
            let mut epoch = state.epoch.lock().await;
            let epoch = epoch.as_mut().ok_or(EngineError::GameNotInitialized)?;
            epoch.prize_pool = epoch.prize_pool.saturating_add(price);
            epoch.epoch_no
        };

        let new_balance = {
            let mut run = state
                .players
                .get_mut(&player)
                .ok_or(EngineError::PlayerNotFound)?;
            run.ciphers = run.ciphers.saturating_add(amount);
            run.total_ciphers_bought = run.total_ciphers_bought.saturating_add(amount);
            run.joined_epoch = Some(epoch_no);
            run.touch();
            run.ciphers
        };

        info!(%player, amount, price, epoch_no, "Ciphers purchased");
        {
            let mut feed = state.feed.lock();
            feed.append(FeedEvent::private(
                player,
                EventKind::CiphersPurchased,
                format!("bought {amount} ciphers"),
            ));
            feed.append(FeedEvent::global(
                EventKind::CiphersPurchased,
                format!("runner {player} fed {price} units into the pool"),
            ));
        }

        Ok(new_balance)
    }
}
