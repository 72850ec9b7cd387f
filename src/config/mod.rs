//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LENS_BUILDER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use lens_builder::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Exporting as {}", config.export.format);
//! ```

mod error;
mod export;
mod lens;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use lens::LensConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Export format and destination
    #[serde(default)]
    pub export: ExportConfig,

    /// Log filter and output style
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Lens defaults
    #[serde(default)]
    pub lens: LensConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `LENS_BUILDER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LENS_BUILDER__EXPORT__FORMAT=yaml` -> `export.format = yaml`
    /// - `LENS_BUILDER__LOGGING__LEVEL=debug` -> `logging.level = debug`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LENS_BUILDER")
                    .prefix_separator("__")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.export.validate()?;
        self.logging.validate()?;
        self.lens.validate()?;
        Ok(())
    }
}
