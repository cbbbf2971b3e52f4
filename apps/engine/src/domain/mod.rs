//! Domain layer: pure engine rules, no I/O.

pub mod cards;
pub mod direction;
pub mod epoch;
pub mod events;
pub mod outcome;
pub mod rules;
pub mod run_state;
pub mod snapshot;

#[cfg(test)]
mod tests_events;
#[cfg(test)]
mod tests_outcome;
#[cfg(test)]
mod tests_props_rules;

// Re-exports for ergonomics
pub use cards::{CardCounts, CardKind, CardSelection};
pub use direction::{correct_direction, derive_award_seed, Direction};
pub use epoch::Epoch;
pub use events::{EventFeed, EventKind, EventScope, FeedEvent};
pub use outcome::{apply_reveal, draw_award, CardAward, MoveOutcome};
pub use rules::move_cost;
pub use run_state::{require_pending, PendingMove, PlayerId, RunState};
pub use snapshot::RunSnapshot;
