//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ConfigValidationError;

/// Where questionnaire progress is persisted
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory; lost on restart
    Memory,
    /// One file per key under `directory`
    #[default]
    File,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.backend == StorageBackend::File && self.directory.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyStorageDirectory);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("./data/management-compass")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.directory, PathBuf::from("./data/management-compass"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_directory_for_file_backend() {
        let config = StorageConfig {
            directory: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyStorageDirectory)
        );
    }

    #[test]
    fn test_memory_backend_ignores_directory() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            directory: PathBuf::new(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_storage_config_deserialization() {
        let json = r#"{ "backend": "memory" }"#;
        let config: StorageConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.directory, default_directory());
    }
}
