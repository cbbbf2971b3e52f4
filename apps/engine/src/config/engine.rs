//! Tunable engine parameters.

use std::env;
use std::str::FromStr;

use crate::domain::rules;
use crate::errors::engine::EngineError;

/// Engine parameters fixed at construction time.
///
/// Defaults come from `domain::rules`; each can be overridden from the
/// environment via [`EngineConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Smallest-currency-unit price of one cipher. The full purchase price
    /// routes to the prize pool.
    pub unit_cost: u64,
    /// Correct steps required to finish a run. Fixed across epochs.
    pub initial_path_length: u16,
    /// Audit feed ring-buffer capacity.
    pub max_feed_events: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            unit_cost: rules::DEFAULT_UNIT_COST,
            initial_path_length: rules::DEFAULT_PATH_LENGTH,
            max_feed_events: rules::DEFAULT_MAX_FEED_EVENTS,
        }
    }
}

impl EngineConfig {
    /// Build from environment variables, falling back to defaults.
    ///
    /// Recognized variables: `CIPHER_UNIT_COST`, `INITIAL_PATH_LENGTH`,
    /// `MAX_FEED_EVENTS`.
    pub fn from_env() -> Result<Self, EngineError> {
        let config = Self {
            unit_cost: env_or("CIPHER_UNIT_COST", rules::DEFAULT_UNIT_COST)?,
            initial_path_length: env_or("INITIAL_PATH_LENGTH", rules::DEFAULT_PATH_LENGTH)?,
            max_feed_events: env_or("MAX_FEED_EVENTS", rules::DEFAULT_MAX_FEED_EVENTS)?,
        };
        config.validated()
    }

    /// Reject parameter combinations the engine cannot run with.
    pub fn validated(self) -> Result<Self, EngineError> {
        if self.initial_path_length == 0 {
            return Err(EngineError::Config(
                "INITIAL_PATH_LENGTH must be at least 1".to_string(),
            ));
        }
        if self.unit_cost == 0 {
            return Err(EngineError::Config(
                "CIPHER_UNIT_COST must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Read and parse an environment variable, or fall back to `default`.
fn env_or<T: FromStr>(name: &str, default: T) -> Result<T, EngineError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse()
            .map_err(|_| EngineError::Config(format!("cannot parse '{raw}' for {name}"))),
    }
}
