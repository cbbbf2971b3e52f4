//! In-memory settlement ledger.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::run_state::PlayerId;
use crate::ledger::{LedgerError, SettlementLedger};

/// DashMap-backed ledger for embedding, demos and tests.
///
/// Transfers settle atomically under the per-account entry lock; a failed
/// debit moves nothing.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    balances: DashMap<PlayerId, u64>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account balance.
    pub fn fund(&self, account: PlayerId, amount: u64) {
        let mut balance = self.balances.entry(account).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    pub fn balance(&self, account: PlayerId) -> u64 {
        self.balances.get(&account).map(|b| *b).unwrap_or(0)
    }
}

#[async_trait]
impl SettlementLedger for MemoryLedger {
    async fn debit(&self, account: PlayerId, amount: u64) -> Result<(), LedgerError> {
        let mut balance = self.balances.entry(account).or_insert(0);
        if *balance < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        *balance -= amount;
        Ok(())
    }

    async fn credit(&self, account: PlayerId, amount: u64) -> Result<(), LedgerError> {
        let mut balance = self.balances.entry(account).or_insert(0);
        *balance = balance.saturating_add(amount);
        Ok(())
    }
}
