//! Central engine error type.
//!
//! Oracle- and ledger-agnostic surface for every fallible engine operation.
//! Callers branch on [`EngineError::code`] or on the classification helpers
//! rather than on display strings.

use thiserror::Error;

use crate::errors::error_code::ErrorCode;
use crate::ledger::LedgerError;
use crate::oracle::OracleError;

/// Every failure an engine operation can surface.
///
/// Three classes, per the protocol's failure model:
/// pre-state-change validation (reject before any mutation), oracle timing
/// (retryable or fatal for the pending move), and external-resource failures
/// (the whole operation fails atomically).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("game has not been initialized")]
    GameNotInitialized,
    #[error("game is already initialized")]
    GameAlreadyInitialized,
    #[error("player has not been initialized")]
    PlayerNotFound,
    #[error("player is already initialized")]
    PlayerAlreadyInitialized,

    #[error("a committed move is already awaiting reveal")]
    OperationInProgress,
    #[error("path is already completed")]
    PathAlreadyCompleted,
    #[error("invalid card selection: {0}")]
    InvalidCardSelection(String),
    #[error("insufficient ciphers: need {needed}, have {available}")]
    InsufficientCiphers { needed: u64, available: u64 },
    #[error("cipher amount must be positive")]
    NegativeCiphersAmount,
    #[error("no committed move to reveal")]
    NoPendingMove,

    #[error("randomness not resolved yet")]
    RandomnessNotResolved,
    #[error("randomness expired before reveal")]
    RandomnessExpired,
    #[error("resolved randomness is stale")]
    RandomnessStale,
    #[error("pending move was committed under a finished epoch")]
    StaleEpoch,

    #[error("wallet balance cannot cover the purchase")]
    InsufficientBalance,
    #[error("ledger transfer failed: {0}")]
    Transfer(String),
    #[error("oracle failure: {0}")]
    Oracle(String),

    #[error("pending move changed during reveal")]
    Conflict,
    #[error("configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Canonical code for programmatic handling.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::GameNotInitialized => ErrorCode::GameNotInitialized,
            Self::GameAlreadyInitialized => ErrorCode::GameAlreadyInitialized,
            Self::PlayerNotFound => ErrorCode::PlayerNotFound,
            Self::PlayerAlreadyInitialized => ErrorCode::PlayerAlreadyInitialized,
            Self::OperationInProgress => ErrorCode::OperationInProgress,
            Self::PathAlreadyCompleted => ErrorCode::PathAlreadyCompleted,
            Self::InvalidCardSelection(_) => ErrorCode::InvalidCardSelection,
            Self::InsufficientCiphers { .. } => ErrorCode::InsufficientCiphers,
            Self::NegativeCiphersAmount => ErrorCode::NegativeCiphersAmount,
            Self::NoPendingMove => ErrorCode::NoPendingMove,
            Self::RandomnessNotResolved => ErrorCode::RandomnessNotResolved,
            Self::RandomnessExpired => ErrorCode::RandomnessExpired,
            Self::RandomnessStale => ErrorCode::RandomnessStale,
            Self::StaleEpoch => ErrorCode::StaleEpoch,
            Self::InsufficientBalance => ErrorCode::InsufficientBalance,
            Self::Transfer(_) => ErrorCode::TransferFailed,
            Self::Oracle(_) => ErrorCode::OracleFailure,
            Self::Conflict => ErrorCode::Conflict,
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// Whether retrying the same call later can succeed without the caller
    /// changing anything.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RandomnessNotResolved | Self::Transfer(_) | Self::Oracle(_)
        )
    }

    /// Whether this failure consumes the pending move. The debited commit
    /// cost is never refunded on these paths.
    pub const fn clears_pending(&self) -> bool {
        matches!(
            self,
            Self::RandomnessExpired | Self::RandomnessStale | Self::StaleEpoch
        )
    }
}

impl From<OracleError> for EngineError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::NotResolved => Self::RandomnessNotResolved,
            OracleError::Expired => Self::RandomnessExpired,
            OracleError::Stale => Self::RandomnessStale,
            OracleError::UnknownHandle => Self::Oracle("unknown commitment handle".to_string()),
            OracleError::Backend(detail) => Self::Oracle(detail),
        }
    }
}

impl From<LedgerError> for EngineError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientBalance => Self::InsufficientBalance,
            LedgerError::Transfer(detail) => Self::Transfer(detail),
        }
    }
}
