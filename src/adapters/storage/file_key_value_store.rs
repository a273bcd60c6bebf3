//! File-based Key-Value Store Adapter
//!
//! Stores each key as its own file under a base directory, so progress
//! survives restarts and can be inspected by hand.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::ports::{validate_key, KeyValueStore, KeyValueStoreError};

const VALUE_EXTENSION: &str = "json";

/// File-based key-value storage
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store with a base directory
    ///
    /// The directory is created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data/compass");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a key
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.{VALUE_EXTENSION}"))
    }
}

fn io_error(err: std::io::Error) -> KeyValueStoreError {
    KeyValueStoreError::IoError(err.to_string())
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        validate_key(key)?;
        let path = self.key_path(key);

        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        fs::create_dir_all(&self.base_path).await.map_err(io_error)?;

        let path = self.key_path(key);
        // Write then rename so a crash never leaves a half-written value.
        let tmp_path = path.with_extension(format!("{VALUE_EXTENSION}.tmp"));
        fs::write(&tmp_path, value).await.map_err(io_error)?;
        fs::rename(&tmp_path, &path).await.map_err(io_error)?;

        debug!(key, path = %path.display(), bytes = value.len(), "stored value on disk");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        match fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(err)),
        }
    }

    async fn contains(&self, key: &str) -> Result<bool, KeyValueStoreError> {
        validate_key(key)?;
        fs::try_exists(self.key_path(key)).await.map_err(io_error)
    }
}
