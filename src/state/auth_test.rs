use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::error::StorageError;
use crate::util::storage::MemoryStorage;

struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn stored_id(value: &str) -> MemoryStorage {
    MemoryStorage::new().with_entry("id", value)
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn initialize_reads_present_key() {
    let holder = AuthHolder::initialize(&stored_id("abc123"), &AuthConfig::default());
    assert_eq!(holder.current(), Some("abc123".to_owned()));
}

#[test]
fn initialize_missing_key_is_absent() {
    let holder = AuthHolder::initialize(&MemoryStorage::new(), &AuthConfig::default());
    assert_eq!(holder.current(), None);
}

#[test]
fn initialize_uses_configured_key() {
    let store = MemoryStorage::new().with_entry("id", "wrong").with_entry("token", "right");
    let holder = AuthHolder::initialize(&store, &AuthConfig::new("token"));
    assert_eq!(holder.current(), Some("right".to_owned()));
}

#[test]
fn initialize_storage_failure_is_absent() {
    let holder = AuthHolder::initialize(&FailingStore, &AuthConfig::default());
    assert_eq!(holder.current(), None);
}

#[test]
fn initialize_accepts_trait_object_store() {
    let store: Box<dyn KeyValueStore> = Box::new(stored_id("abc123"));
    let holder = AuthHolder::initialize(store.as_ref(), &AuthConfig::default());
    assert_eq!(holder.current(), Some("abc123".to_owned()));
}

#[test]
fn default_holder_is_absent() {
    assert_eq!(AuthHolder::default().current(), None);
}

// =============================================================
// Set
// =============================================================

#[test]
fn set_replaces_value() {
    let holder = AuthHolder::new(None);
    holder.set(Some("xyz789".to_owned()));
    assert_eq!(holder.current(), Some("xyz789".to_owned()));
}

#[test]
fn set_to_none_clears_value() {
    let holder = AuthHolder::new(Some("abc123".to_owned()));
    holder.set(None);
    assert_eq!(holder.current(), None);
}

#[test]
fn set_does_not_write_store() {
    let store = stored_id("abc123");
    let config = AuthConfig::default();
    let holder = AuthHolder::initialize(&store, &config);
    assert_eq!(holder.current(), Some("abc123".to_owned()));

    holder.set(Some("xyz789".to_owned()));
    assert_eq!(holder.current(), Some("xyz789".to_owned()));

    assert_eq!(store.get_item("id"), Ok(Some("abc123".to_owned())));
    let fresh = AuthHolder::initialize(&store, &config);
    assert_eq!(fresh.current(), Some("abc123".to_owned()));
}

#[test]
fn clones_share_one_value() {
    let holder = AuthHolder::new(Some("abc123".to_owned()));
    let a = holder.clone();
    let b = holder.clone();
    a.set(Some("xyz789".to_owned()));
    assert_eq!(holder.current(), Some("xyz789".to_owned()));
    assert_eq!(b.current(), Some("xyz789".to_owned()));
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn subscribers_receive_new_value() {
    let holder = AuthHolder::new(None);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    holder.subscribe(move |v| sink.borrow_mut().push(v.clone()));

    holder.set(Some("a".to_owned()));
    holder.set(None);

    assert_eq!(*seen.borrow(), vec![Some("a".to_owned()), None]);
}

#[test]
fn subscribers_run_in_subscription_order() {
    let holder = AuthHolder::new(None);
    let order = Rc::new(RefCell::new(Vec::new()));
    for n in 0..3 {
        let order = Rc::clone(&order);
        holder.subscribe(move |_| order.borrow_mut().push(n));
    }
    holder.set(Some("x".to_owned()));
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn subscribe_does_not_fire_immediately() {
    let holder = AuthHolder::new(Some("abc123".to_owned()));
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    holder.subscribe(move |_| counter.set(counter.get() + 1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn unsubscribe_stops_notifications() {
    let holder = AuthHolder::new(None);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let id = holder.subscribe(move |_| counter.set(counter.get() + 1));

    holder.set(Some("a".to_owned()));
    assert!(holder.unsubscribe(id));
    holder.set(Some("b".to_owned()));

    assert_eq!(calls.get(), 1);
    assert_eq!(holder.subscriber_count(), 0);
}

#[test]
fn unsubscribe_unknown_id_returns_false() {
    let holder = AuthHolder::new(None);
    let id = holder.subscribe(|_| {});
    assert!(holder.unsubscribe(id));
    assert!(!holder.unsubscribe(id));
}

#[test]
fn subscription_ids_are_unique() {
    let holder = AuthHolder::new(None);
    let a = holder.subscribe(|_| {});
    let b = holder.subscribe(|_| {});
    assert_ne!(a, b);
    assert_eq!(holder.subscriber_count(), 2);
}

#[test]
fn subscriber_can_read_holder_during_notification() {
    let holder = AuthHolder::new(None);
    let observed = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&observed);
    let reader = holder.clone();
    holder.subscribe(move |_| *sink.borrow_mut() = reader.current());

    holder.set(Some("abc123".to_owned()));
    assert_eq!(*observed.borrow(), Some("abc123".to_owned()));
}

#[test]
fn subscriber_can_set_during_notification() {
    let holder = AuthHolder::new(None);
    let writer = holder.clone();
    holder.subscribe(move |v| {
        if v.as_deref() == Some("raw") {
            writer.set(Some("normalized".to_owned()));
        }
    });

    holder.set(Some("raw".to_owned()));
    assert_eq!(holder.current(), Some("normalized".to_owned()));
}

#[test]
fn debug_shows_value_and_subscriber_count() {
    let holder = AuthHolder::new(Some("abc123".to_owned()));
    holder.subscribe(|_| {});
    let rendered = format!("{holder:?}");
    assert!(rendered.contains("abc123"));
    assert!(rendered.contains("subscribers: 1"));
}
