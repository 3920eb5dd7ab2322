//! Leptos context binding for the auth value.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` provides an `AuthContext` signal pair to its subtree and
//! reads the stored identifier once, after hydration, so the server HTML and
//! the first client render agree on an absent value. Every descendant calling
//! `use_auth` gets handles to the same signal, so a write from one consumer
//! is seen by all of them.

#[cfg(test)]
#[path = "auth_provider_test.rs"]
mod auth_provider_test;

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::state::auth::{AuthValue, read_initial_value};
#[cfg(feature = "hydrate")]
use crate::util::storage::BrowserStorage;
use crate::util::storage::KeyValueStore;

/// The `{ auth, set_auth }` pair exposed to consumers.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub auth: ReadSignal<AuthValue>,
    pub set_auth: WriteSignal<AuthValue>,
}

impl AuthContext {
    pub fn new(initial: AuthValue) -> Self {
        let (auth, set_auth) = signal(initial);
        Self { auth, set_auth }
    }

    /// Tracked read of the current value.
    pub fn current(&self) -> AuthValue {
        self.auth.get()
    }

    /// Replace the value in memory. Storage is left untouched.
    pub fn set(&self, value: AuthValue) {
        self.set_auth.set(value);
    }
}

/// Seed an `AuthContext` from `store` and provide it to the current owner.
pub fn provide_auth_context<S: KeyValueStore + ?Sized>(store: &S, config: &AuthConfig) -> AuthContext {
    let ctx = AuthContext::new(read_initial_value(store, config));
    provide_context(ctx);
    ctx
}

/// Load the stored value into an existing context.
///
/// Leaves the context untouched when the store holds nothing, so a value set
/// before the read is not cleared.
pub fn restore_auth<S: KeyValueStore + ?Sized>(ctx: AuthContext, store: &S, config: &AuthConfig) {
    if let Some(value) = read_initial_value(store, config) {
        leptos::logging::log!("auth restored from storage key {}", config.storage_key);
        ctx.set(Some(value));
    }
}

/// Fetch the nearest `AuthContext`.
///
/// # Panics
///
/// Panics when called outside an `AuthProvider` subtree.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Fetch the nearest `AuthContext`, if any provider is in scope.
pub fn try_use_auth() -> Option<AuthContext> {
    use_context::<AuthContext>()
}

/// Provides auth state backed by browser `localStorage` to its children.
#[component]
pub fn AuthProvider(
    /// Storage settings; defaults to the `"id"` key.
    #[prop(optional)]
    config: Option<AuthConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let ctx = AuthContext::new(None);
    provide_context(ctx);

    // localStorage exists only in the browser; read it once after mount.
    #[cfg(feature = "hydrate")]
    Effect::new(move || restore_auth(ctx, &BrowserStorage, &config));
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    children()
}
