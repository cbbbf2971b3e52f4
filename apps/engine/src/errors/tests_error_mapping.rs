use crate::errors::engine::EngineError;
use crate::errors::error_code::ErrorCode;
use crate::ledger::LedgerError;
use crate::oracle::OracleError;

#[test]
fn every_variant_maps_to_its_code() {
    let cases: Vec<(EngineError, ErrorCode)> = vec![
        (EngineError::GameNotInitialized, ErrorCode::GameNotInitialized),
        (
            EngineError::GameAlreadyInitialized,
            ErrorCode::GameAlreadyInitialized,
        ),
        (EngineError::PlayerNotFound, ErrorCode::PlayerNotFound),
        (
            EngineError::PlayerAlreadyInitialized,
            ErrorCode::PlayerAlreadyInitialized,
        ),
        (EngineError::OperationInProgress, ErrorCode::OperationInProgress),
        (EngineError::PathAlreadyCompleted, ErrorCode::PathAlreadyCompleted),
        (
            EngineError::InvalidCardSelection("dup".into()),
            ErrorCode::InvalidCardSelection,
        ),
        (
            EngineError::InsufficientCiphers {
                needed: 2,
                available: 1,
            },
            ErrorCode::InsufficientCiphers,
        ),
        (EngineError::NegativeCiphersAmount, ErrorCode::NegativeCiphersAmount),
        (EngineError::NoPendingMove, ErrorCode::NoPendingMove),
        (EngineError::RandomnessNotResolved, ErrorCode::RandomnessNotResolved),
        (EngineError::RandomnessExpired, ErrorCode::RandomnessExpired),
        (EngineError::RandomnessStale, ErrorCode::RandomnessStale),
        (EngineError::StaleEpoch, ErrorCode::StaleEpoch),
        (EngineError::InsufficientBalance, ErrorCode::InsufficientBalance),
        (EngineError::Transfer("rpc".into()), ErrorCode::TransferFailed),
        (EngineError::Oracle("down".into()), ErrorCode::OracleFailure),
        (EngineError::Conflict, ErrorCode::Conflict),
        (EngineError::Config("bad var".into()), ErrorCode::ConfigError),
    ];

    for (err, code) in cases {
        assert_eq!(err.code(), code, "wrong code for {err:?}");
    }
}

#[test]
fn retryable_classification() {
    assert!(EngineError::RandomnessNotResolved.is_retryable());
    assert!(EngineError::Transfer("rpc".into()).is_retryable());
    assert!(EngineError::Oracle("down".into()).is_retryable());

    assert!(!EngineError::RandomnessExpired.is_retryable());
    assert!(!EngineError::StaleEpoch.is_retryable());
    assert!(!EngineError::InsufficientCiphers {
        needed: 2,
        available: 0
    }
    .is_retryable());
    assert!(!EngineError::InsufficientBalance.is_retryable());
}

#[test]
fn fatal_oracle_timing_clears_pending() {
    assert!(EngineError::RandomnessExpired.clears_pending());
    assert!(EngineError::RandomnessStale.clears_pending());
    assert!(EngineError::StaleEpoch.clears_pending());

    // Retryable and validation failures must leave the pending move alone.
    assert!(!EngineError::RandomnessNotResolved.clears_pending());
    assert!(!EngineError::NoPendingMove.clears_pending());
    assert!(!EngineError::Transfer("rpc".into()).clears_pending());
}

#[test]
fn oracle_errors_convert() {
    assert_eq!(
        EngineError::from(OracleError::NotResolved),
        EngineError::RandomnessNotResolved
    );
    assert_eq!(
        EngineError::from(OracleError::Expired),
        EngineError::RandomnessExpired
    );
    assert_eq!(
        EngineError::from(OracleError::Stale),
        EngineError::RandomnessStale
    );
    assert!(matches!(
        EngineError::from(OracleError::UnknownHandle),
        EngineError::Oracle(_)
    ));
    assert!(matches!(
        EngineError::from(OracleError::Backend("timeout".into())),
        EngineError::Oracle(_)
    ));
}

#[test]
fn ledger_errors_convert() {
    assert_eq!(
        EngineError::from(LedgerError::InsufficientBalance),
        EngineError::InsufficientBalance
    );
    assert!(matches!(
        EngineError::from(LedgerError::Transfer("halted".into())),
        EngineError::Transfer(_)
    ));
}
