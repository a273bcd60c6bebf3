//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the filter: `RUST_LOG` wins, the configured level is the fallback.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|source| TelemetryError::EnvFilter {
            value: config.level.clone(),
            source,
        }),
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if config.json {
        builder.json().try_init().map_err(TelemetryError::Subscriber)
    } else {
        builder
            .compact()
            .with_ansi(false)
            .try_init()
            .map_err(TelemetryError::Subscriber)
    }
}
