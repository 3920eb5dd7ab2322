//! Auth container configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the current user identifier.
pub const DEFAULT_STORAGE_KEY: &str = "id";

/// Settings for reading the initial auth value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub storage_key: String,
}

impl AuthConfig {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self { storage_key: storage_key.into() }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}
