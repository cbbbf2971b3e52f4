//! Error codes for the run-progression engine.
//!
//! This module defines all error codes used throughout the engine.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in surfaced failures.

use core::fmt;

/// Centralized error codes for the engine.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that callers
/// can branch on programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lifecycle
    /// Game epoch has not been created yet
    GameNotInitialized,
    /// Game epoch already exists
    GameAlreadyInitialized,
    /// Player has no run state
    PlayerNotFound,
    /// Player run state already exists
    PlayerAlreadyInitialized,

    // Move validation
    /// A committed move is already awaiting reveal
    OperationInProgress,
    /// Position is already at the end of the path
    PathAlreadyCompleted,
    /// Card selection is duplicated or not owned
    InvalidCardSelection,
    /// Not enough ciphers for the move cost
    InsufficientCiphers,
    /// Purchase amount must be positive
    NegativeCiphersAmount,
    /// No committed move to reveal
    NoPendingMove,

    // Oracle timing
    /// Bound oracle value not finalized yet (retryable)
    RandomnessNotResolved,
    /// Commitment validity window has passed (fatal for the pending move)
    RandomnessExpired,
    /// Resolved oracle value is no longer safe to consume
    RandomnessStale,
    /// Pending move was committed under a finished epoch
    StaleEpoch,

    // External resources
    /// Wallet balance cannot cover the purchase
    InsufficientBalance,
    /// Ledger transfer failed
    TransferFailed,
    /// Oracle transport or backend failure
    OracleFailure,

    // System
    /// Pending move changed underneath an in-flight reveal
    Conflict,
    /// Configuration error
    ConfigError,
    /// Internal engine error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Lifecycle
            Self::GameNotInitialized => "GAME_NOT_INITIALIZED",
            Self::GameAlreadyInitialized => "GAME_ALREADY_INITIALIZED",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::PlayerAlreadyInitialized => "PLAYER_ALREADY_INITIALIZED",

            // Move validation
            Self::OperationInProgress => "OPERATION_IN_PROGRESS",
            Self::PathAlreadyCompleted => "PATH_ALREADY_COMPLETED",
            Self::InvalidCardSelection => "INVALID_CARD_SELECTION",
            Self::InsufficientCiphers => "INSUFFICIENT_CIPHERS",
            Self::NegativeCiphersAmount => "NEGATIVE_CIPHERS_AMOUNT",
            Self::NoPendingMove => "NO_PENDING_MOVE",

            // Oracle timing
            Self::RandomnessNotResolved => "RANDOMNESS_NOT_RESOLVED",
            Self::RandomnessExpired => "RANDOMNESS_EXPIRED",
            Self::RandomnessStale => "RANDOMNESS_STALE",
            Self::StaleEpoch => "STALE_EPOCH",

            // External resources
            Self::InsufficientBalance => "INSUFFICIENT_BALANCE",
            Self::TransferFailed => "TRANSFER_FAILED",
            Self::OracleFailure => "ORACLE_FAILURE",

            // System
            Self::Conflict => "CONFLICT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        // Verify that all error codes produce the expected SCREAMING_SNAKE_CASE strings
        assert_eq!(ErrorCode::GameNotInitialized.as_str(), "GAME_NOT_INITIALIZED");
        assert_eq!(
            ErrorCode::GameAlreadyInitialized.as_str(),
            "GAME_ALREADY_INITIALIZED"
        );
        assert_eq!(ErrorCode::PlayerNotFound.as_str(), "PLAYER_NOT_FOUND");
        assert_eq!(
            ErrorCode::PlayerAlreadyInitialized.as_str(),
            "PLAYER_ALREADY_INITIALIZED"
        );
        assert_eq!(ErrorCode::OperationInProgress.as_str(), "OPERATION_IN_PROGRESS");
        assert_eq!(ErrorCode::PathAlreadyCompleted.as_str(), "PATH_ALREADY_COMPLETED");
        assert_eq!(ErrorCode::InvalidCardSelection.as_str(), "INVALID_CARD_SELECTION");
        assert_eq!(ErrorCode::InsufficientCiphers.as_str(), "INSUFFICIENT_CIPHERS");
        assert_eq!(ErrorCode::NegativeCiphersAmount.as_str(), "NEGATIVE_CIPHERS_AMOUNT");
        assert_eq!(ErrorCode::NoPendingMove.as_str(), "NO_PENDING_MOVE");
        assert_eq!(
            ErrorCode::RandomnessNotResolved.as_str(),
            "RANDOMNESS_NOT_RESOLVED"
        );
        assert_eq!(ErrorCode::RandomnessExpired.as_str(), "RANDOMNESS_EXPIRED");
        assert_eq!(ErrorCode::RandomnessStale.as_str(), "RANDOMNESS_STALE");
        assert_eq!(ErrorCode::StaleEpoch.as_str(), "STALE_EPOCH");
        assert_eq!(ErrorCode::InsufficientBalance.as_str(), "INSUFFICIENT_BALANCE");
        assert_eq!(ErrorCode::TransferFailed.as_str(), "TRANSFER_FAILED");
        assert_eq!(ErrorCode::OracleFailure.as_str(), "ORACLE_FAILURE");
        assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
        assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::NoPendingMove), "NO_PENDING_MOVE");
        assert_eq!(format!("{}", ErrorCode::StaleEpoch), "STALE_EPOCH");
        assert_eq!(
            format!("{}", ErrorCode::RandomnessNotResolved),
            "RANDOMNESS_NOT_RESOLVED"
        );
    }
}
