//! Test doubles for integration and scenario tests.

pub mod scripted_oracle;

pub use scripted_oracle::{entropy_for, entropy_with_salt, ScriptedOracle};
