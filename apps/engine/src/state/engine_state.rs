//! Shared state behind every engine operation.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex as SyncMutex;
use tokio::sync::Mutex;

use crate::config::engine::EngineConfig;
use crate::domain::epoch::Epoch;
use crate::domain::events::EventFeed;
use crate::domain::run_state::{PlayerId, RunState};
use crate::ledger::SettlementLedger;
use crate::oracle::PathOracle;

/// Application state containing shared engine resources.
///
/// Lock discipline: player entries and the feed are never held across an
/// await. The epoch mutex is the only lock held through an external call
/// (the win payout), which is what serializes Win and Purchase on the shared
/// aggregate.
pub struct EngineState {
    pub config: EngineConfig,
    /// Per-player run states; each entry is mutated only on behalf of its
    /// own player.
    pub players: DashMap<PlayerId, RunState>,
    /// The single shared epoch/prize-pool aggregate. `None` until
    /// InitializeGame.
    pub epoch: Mutex<Option<Epoch>>,
    /// Bounded audit feed consumed by the EventSink.
    pub feed: SyncMutex<EventFeed>,
    pub oracle: Arc<dyn PathOracle>,
    pub ledger: Arc<dyn SettlementLedger>,
}

impl EngineState {
    /// Create engine state with the given collaborators.
    pub fn new(
        config: EngineConfig,
        oracle: Arc<dyn PathOracle>,
        ledger: Arc<dyn SettlementLedger>,
    ) -> Self {
        let feed = EventFeed::new(config.max_feed_events);
        Self {
            config,
            players: DashMap::new(),
            epoch: Mutex::new(None),
            feed: SyncMutex::new(feed),
            oracle,
            ledger,
        }
    }
}
