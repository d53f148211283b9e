//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SECTOR_CLASSIFIER` prefix and nested values use double underscores as separators.
//!
//! The keyword and metadata tables are not configurable: they are part of
//! the classification contract.
//!
//! # Example
//!
//! ```no_run
//! use sector_classifier::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Logging with filter {}", config.logging.filter);
//! ```

mod error;
mod logging;
mod output;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use output::{OutputConfig, OutputFormat};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid configuration.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Result rendering configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SECTOR_CLASSIFIER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SECTOR_CLASSIFIER__LOGGING__FILTER=debug` -> `logging.filter = "debug"`
    /// - `SECTOR_CLASSIFIER__OUTPUT__FORMAT=json` -> `output.format = json`
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
                    .prefix("SECTOR_CLASSIFIER")
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
    /// Returns `ValidationError` if the log filter is empty or unparseable.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}
