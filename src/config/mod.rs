//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MANAGEMENT_COMPASS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use management_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Storing progress in {:?}", config.storage.directory);
//! ```

mod error;
mod logging;
mod questionnaire;
mod storage;

pub use error::{ConfigError, ConfigValidationError};
pub use logging::LoggingConfig;
pub use questionnaire::QuestionnaireConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where questionnaire progress is persisted
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Questionnaire flow settings
    #[serde(default)]
    pub questionnaire: QuestionnaireConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MANAGEMENT_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MANAGEMENT_COMPASS__STORAGE__BACKEND=memory` -> `storage.backend = memory`
    /// - `MANAGEMENT_COMPASS__QUESTIONNAIRE__FLOW=priority_ratings` -> `questionnaire.flow`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MANAGEMENT_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }
}
