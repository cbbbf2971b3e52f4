//! Append-only audit feed with bounded capacity.
//!
//! Every engine mutation leaves a trail here for the EventSink collaborator.
//! Storage is a ring buffer: appending at the tail evicts the oldest entries
//! once capacity is exceeded. Reads are non-destructive.

use std::collections::VecDeque;

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::run_state::PlayerId;

/// Audit event categories surfaced to the EventSink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Moved,
    CardUsed,
    CiphersPurchased,
    Won,
    CardCollected,
    Joined,
}

/// Visibility of a feed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventScope {
    /// Visible to everyone.
    Global,
    /// Visible only to the named player.
    Player(PlayerId),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedEvent {
    pub kind: EventKind,
    pub message: String,
    pub at: OffsetDateTime,
    pub scope: EventScope,
}

impl FeedEvent {
    pub fn global(kind: EventKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            at: OffsetDateTime::now_utc(),
            scope: EventScope::Global,
        }
    }

    pub fn private(player: PlayerId, kind: EventKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            at: OffsetDateTime::now_utc(),
            scope: EventScope::Player(player),
        }
    }
}

/// Bounded audit feed.
///
/// Entries are kept in append order, which also orders equal timestamps.
#[derive(Debug)]
pub struct EventFeed {
    entries: VecDeque<FeedEvent>,
    capacity: usize,
}

impl EventFeed {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push to the tail, evicting from the head while over capacity.
    pub fn append(&mut self, event: FeedEvent) {
        self.entries.push_back(event);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All retained events, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &FeedEvent> {
        self.entries.iter()
    }

    /// Global events only, oldest first.
    pub fn global(&self) -> Vec<FeedEvent> {
        self.entries
            .iter()
            .filter(|e| e.scope == EventScope::Global)
            .cloned()
            .collect()
    }

    /// The feed as one player sees it: global entries plus that player's
    /// private entries, oldest first.
    pub fn visible_to(&self, player: PlayerId) -> Vec<FeedEvent> {
        self.entries
            .iter()
            .filter(|e| match e.scope {
                EventScope::Global => true,
                EventScope::Player(owner) => owner == player,
            })
            .cloned()
            .collect()
    }
}
