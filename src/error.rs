//! Storage error types.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never reach consumers. Initialization logs them and falls
//! back to an absent auth value.

/// Failure reading from a key-value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("no browser window available")]
    NoWindow,
    #[error("local storage unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}
