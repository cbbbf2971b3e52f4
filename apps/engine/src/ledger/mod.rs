//! Settlement ledger collaborator contract.
//!
//! External balances (wallets) live behind this seam. The engine debits
//! purchase prices into the pool's custody and credits win payouts out of
//! it; construction, signing, and submission of the actual transfers are the
//! host's concern.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::run_state::PlayerId;

/// Failures surfaced by a [`SettlementLedger`] implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The account balance cannot cover the requested debit.
    #[error("insufficient balance")]
    InsufficientBalance,
    /// The transfer failed for an operational reason.
    #[error("transfer failed: {0}")]
    Transfer(String),
}

/// External wallet/ledger seam.
///
/// Both operations settle atomically: a failure moves no funds, and no
/// partial transfer is ever observable.
#[async_trait]
pub trait SettlementLedger: Send + Sync {
    /// Remove `amount` smallest-currency units from `account`.
    async fn debit(&self, account: PlayerId, amount: u64) -> Result<(), LedgerError>;

    /// Add `amount` smallest-currency units to `account`.
    async fn credit(&self, account: PlayerId, amount: u64) -> Result<(), LedgerError>;
}
