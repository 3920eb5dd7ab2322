//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_provider` publishes the auth value through Leptos context;
//! other components read and write it via `use_auth`.

pub mod auth_badge;
pub mod auth_provider;
