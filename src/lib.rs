//! # auth-context
//!
//! Leptos + WASM authentication-state container for the browser client.
//!
//! The current user identifier is read once from `localStorage` when the
//! provider mounts, held in a reactive cell, and handed to descendant
//! components as an explicit `{ value, setter }` pair. The setter only updates
//! memory; storage is never written.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
