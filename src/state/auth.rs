//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthHolder` is the explicit, non-reactive form of the auth container: one
//! handle per application session, cloned into whatever needs it, with a
//! synchronous subscriber list in place of framework re-rendering. The Leptos
//! binding in `components::auth_provider` seeds its signal from the same
//! initial read.
//!
//! Leptos apps use `AuthContext`; `AuthHolder` is the framework-free API for
//! non-Leptos hosts.
//!
//! The value is read from storage once and never written back.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::AuthConfig;
use crate::util::storage::KeyValueStore;

/// Current user identifier or credential token, absent when signed out.
pub type AuthValue = Option<String>;

/// Read the initial auth value from `store`.
///
/// A missing key yields `None`. Storage failures are logged and also yield
/// `None`. The stored string is returned as-is.
pub fn read_initial_value<S: KeyValueStore + ?Sized>(store: &S, config: &AuthConfig) -> AuthValue {
    match store.get_item(&config.storage_key) {
        Ok(value) => value,
        Err(e) => {
            leptos::logging::warn!("auth storage read failed: key={} error={e}", config.storage_key);
            None
        }
    }
}

/// Handle returned by [`AuthHolder::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&AuthValue)>;

#[derive(Default)]
struct Inner {
    value: AuthValue,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

/// Shared holder of the auth value.
///
/// Clones share one cell, so every handle observes the latest `set`.
#[derive(Clone, Default)]
pub struct AuthHolder {
    inner: Rc<RefCell<Inner>>,
}

impl AuthHolder {
    pub fn new(initial: AuthValue) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value: initial,
                ..Inner::default()
            })),
        }
    }

    /// Build a holder seeded from `store`.
    pub fn initialize<S: KeyValueStore + ?Sized>(store: &S, config: &AuthConfig) -> Self {
        Self::new(read_initial_value(store, config))
    }

    pub fn current(&self) -> AuthValue {
        self.inner.borrow().value.clone()
    }

    /// Replace the value and notify subscribers in subscription order.
    ///
    /// Subscribers run after the internal borrow is released, so they may
    /// read the holder or call `set` again.
    pub fn set(&self, value: AuthValue) {
        let subscribers: Vec<Subscriber> = {
            let mut inner = self.inner.borrow_mut();
            inner.value.clone_from(&value);
            inner.subscribers.iter().map(|(_, s)| Rc::clone(s)).collect()
        };
        for subscriber in subscribers {
            subscriber(&value);
        }
    }

    /// Register a callback invoked with the new value on every `set`.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&AuthValue) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl fmt::Debug for AuthHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("AuthHolder")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}
