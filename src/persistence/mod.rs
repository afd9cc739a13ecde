//! Key/value storage for the score history
//!
//! Backends:
//! - [`MemoryStore`]: process-local map (tests, hosts without storage)
//! - [`FileStore`]: one JSON file per key under a directory
//!
//! Storage is best effort. Callers log failures and keep playing.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A string key/value store
pub trait ScoreStore {
    /// Read the value for `key`; `Ok(None)` if nothing was stored
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Keys become file names, so keep them to a safe alphabet
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
