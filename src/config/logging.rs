//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ConfigValidationError;

/// Logging configuration
///
/// `RUST_LOG` takes precedence over `level` when set.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.level.trim().is_empty() {
            return Err(ConfigValidationError::MissingRequired("LOGGING__LEVEL"));
        }
        EnvFilter::try_new(&self.level)
            .map_err(|_| ConfigValidationError::InvalidLogLevel(self.level.clone()))?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info,management_compass=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info,management_compass=debug");
        assert!(!config.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_level() {
        let config = LoggingConfig {
            level: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::MissingRequired("LOGGING__LEVEL"))
        );
    }

    #[test]
    fn test_validation_invalid_directive() {
        let config = LoggingConfig {
            level: "management_compass=verbose".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidLogLevel(_))
        ));
    }
}
