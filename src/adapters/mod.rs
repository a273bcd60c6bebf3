//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value stores (in-memory, file-based)

pub mod storage;

pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::KeyValueStore;

/// Builds the key-value store selected by configuration.
pub fn key_value_store(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        StorageBackend::File => Arc::new(FileKeyValueStore::new(&config.directory)),
    }
}
