//! Key-value store access for the initial auth read.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth container only ever reads storage, once, at initialization.
//! `BrowserStorage` wraps `window.localStorage` on hydrate builds and no-ops
//! on the server so SSR renders deterministically as signed out.
//! `MemoryStorage` backs tests and non-browser hosts.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::StorageError;

/// Read-only string key-value store.
pub trait KeyValueStore {
    /// Return the value stored under `key`, or `None` when the key is missing.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window().ok_or(StorageError::NoWindow)?;
            let storage = window
                .local_storage()
                .map_err(|e| StorageError::Access(format!("{e:?}")))?
                .ok_or(StorageError::Unavailable)?;
            storage
                .get_item(key)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemoryStorage::insert`].
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }
}
