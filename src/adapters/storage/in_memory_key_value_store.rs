//! In-Memory Key-Value Store Adapter
//!
//! Keeps values in a shared map. Useful for testing and for sessions that
//! do not need to survive a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::ports::{validate_key, KeyValueStore, KeyValueStoreError};

/// In-memory key-value storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Get the number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        validate_key(key)?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        debug!(key, bytes = value.len(), "storing value in memory");
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn contains(&self, key: &str) -> Result<bool, KeyValueStoreError> {
        validate_key(key)?;
        Ok(self.entries.read().await.contains_key(key))
    }
}
