//! In-process implementations of collaborator ports.

pub mod mem_ledger;

pub use mem_ledger::MemoryLedger;
