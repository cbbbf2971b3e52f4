//! Commit-reveal randomness collaborator contract.
//!
//! The engine never generates move randomness itself. At commit time it asks
//! an external oracle for a commitment bound to a not-yet-finalized value;
//! at reveal time it reads the resolved bytes back. The oracle's internal
//! cryptography is opaque here; only this contract matters.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::run_state::PlayerId;

/// Opaque reference to one oracle commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OracleHandle(Uuid);

impl OracleHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OracleHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OracleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binding data for a commitment: ties the randomness request to exactly one
/// move, so a resolved value cannot be replayed for a different step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitContext {
    pub player: PlayerId,
    pub epoch_no: u64,
    pub position: u16,
}

/// Failures surfaced by a [`PathOracle`] implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OracleError {
    /// The bound external value has not been finalized yet. Retry later.
    #[error("randomness not resolved yet")]
    NotResolved,
    /// The commitment's validity window has passed.
    #[error("commitment expired")]
    Expired,
    /// The resolved value is no longer safe to consume.
    #[error("resolved value is stale")]
    Stale,
    /// The handle does not reference a live commitment.
    #[error("unknown commitment handle")]
    UnknownHandle,
    /// Transport or backend failure.
    #[error("oracle backend failure: {0}")]
    Backend(String),
}

/// External commit-reveal randomness source.
///
/// One unbiased direction bit per move is derived from the revealed bytes.
/// The contract guarantees neither the player nor the operator can know the
/// value at commit time; the engine guarantees the derivation from the bytes
/// is fixed before the commitment is made.
#[async_trait]
pub trait PathOracle: Send + Sync {
    /// Record a commitment bound to a future external value.
    async fn commit(&self, ctx: CommitContext) -> Result<OracleHandle, OracleError>;

    /// Whether the bound value has been finalized.
    async fn is_resolved(&self, handle: &OracleHandle) -> Result<bool, OracleError>;

    /// The resolved entropy for a commitment.
    ///
    /// Fails with `NotResolved` before finalization and with `Expired` or
    /// `Stale` once the validity window has passed.
    async fn reveal(&self, handle: &OracleHandle) -> Result<[u8; 32], OracleError>;
}
