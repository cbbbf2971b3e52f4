#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod oracle;
pub mod services;
pub mod state;
pub mod test_support;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::mem_ledger::MemoryLedger;
pub use config::engine::EngineConfig;
pub use domain::{CardKind, CardSelection, Direction, MoveOutcome, PlayerId, RunSnapshot};
pub use errors::engine::EngineError;
pub use errors::error_code::ErrorCode;
pub use ledger::{LedgerError, SettlementLedger};
pub use oracle::{CommitContext, OracleError, OracleHandle, PathOracle};
pub use services::ciphers::CipherService;
pub use services::epochs::EpochService;
pub use services::players::PlayerService;
pub use services::run_flow::RunFlowService;
pub use state::engine_state::EngineState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
