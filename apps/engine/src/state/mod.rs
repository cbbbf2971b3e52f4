//! Shared engine state.

pub mod engine_state;

pub use engine_state::EngineState;
