//! Key-Value Store Port - Interface for persisting questionnaire progress.
//!
//! The questionnaire keeps a small amount of client-side state (the answer
//! record and the current step) under well-known string keys. This port
//! abstracts where those strings live.

use async_trait::async_trait;

/// Errors that can occur during key-value store operations
#[derive(Debug, thiserror::Error)]
pub enum KeyValueStoreError {
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Checks that a key is usable by every adapter.
///
/// Keys are non-empty and may not contain path separators or `..`, since
/// file-backed adapters map one key to one file.
pub fn validate_key(key: &str) -> Result<(), KeyValueStoreError> {
    let has_separator = key.contains(|c: char| c == '/' || c == '\\');
    if key.trim().is_empty() || has_separator || key.contains("..") {
        return Err(KeyValueStoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Port for string values stored under string keys
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Load the value stored under `key`
    ///
    /// # Returns
    /// `None` if nothing is stored under the key
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;

    /// Check if a value exists under `key`
    async fn contains(&self, key: &str) -> Result<bool, KeyValueStoreError> {
        Ok(self.get(key).await?.is_some())
    }
}
