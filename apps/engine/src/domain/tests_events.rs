use crate::domain::events::{EventFeed, EventKind, EventScope, FeedEvent};
use crate::domain::run_state::PlayerId;

#[test]
fn append_keeps_insertion_order() {
    let mut feed = EventFeed::new(8);
    feed.append(FeedEvent::global(EventKind::Joined, "first"));
    feed.append(FeedEvent::global(EventKind::Moved, "second"));
    feed.append(FeedEvent::global(EventKind::Won, "third"));

    let messages: Vec<&str> = feed.entries().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[test]
fn overflow_evicts_the_oldest_entries() {
    let mut feed = EventFeed::new(3);
    for i in 0..5 {
        feed.append(FeedEvent::global(EventKind::Moved, format!("step {i}")));
    }

    assert_eq!(feed.len(), 3);
    let messages: Vec<&str> = feed.entries().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["step 2", "step 3", "step 4"]);
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let mut feed = EventFeed::new(0);
    feed.append(FeedEvent::global(EventKind::Moved, "only"));
    feed.append(FeedEvent::global(EventKind::Moved, "newest"));
    assert_eq!(feed.len(), 1);
    assert_eq!(feed.entries().next().unwrap().message, "newest");
}

#[test]
fn visibility_filters_by_scope() {
    let alice = PlayerId::new();
    let bob = PlayerId::new();

    let mut feed = EventFeed::new(16);
    feed.append(FeedEvent::global(EventKind::Won, "someone won"));
    feed.append(FeedEvent::private(alice, EventKind::CardCollected, "alice card"));
    feed.append(FeedEvent::private(bob, EventKind::CiphersPurchased, "bob purchase"));

    let for_alice = feed.visible_to(alice);
    assert_eq!(for_alice.len(), 2);
    assert!(for_alice.iter().all(|e| match e.scope {
        EventScope::Global => true,
        EventScope::Player(p) => p == alice,
    }));

    let global = feed.global();
    assert_eq!(global.len(), 1);
    assert_eq!(global[0].kind, EventKind::Won);
}

#[test]
fn reads_are_non_destructive() {
    let mut feed = EventFeed::new(4);
    feed.append(FeedEvent::global(EventKind::Joined, "hello"));
    let _ = feed.global();
    let _ = feed.visible_to(PlayerId::new());
    assert_eq!(feed.len(), 1);
}
