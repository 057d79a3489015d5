//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BIAS_OF_THE_DAY` prefix and nested values use double underscores as separators.
//!
//! Every value has a default, so the plugin runs with no environment at all.
//!
//! # Example
//!
//! ```no_run
//! use bias_of_the_day::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Summaries from {}", config.summary.api_base_url);
//! ```

mod error;
mod summary;

pub use error::{ConfigError, ValidationError};
pub use summary::SummaryConfig;

use serde::Deserialize;

/// Human-readable plugin title.
pub const PLUGIN_TITLE: &str = "Cognitive Bias A Day";

/// Project page of the plugin.
pub const PLUGIN_ABOUT_URL: &str = "https://github.com/LeonLiber/cognitive-bias-a-day";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Wikipedia summary service configuration
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Log filter directive, used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BIAS_OF_THE_DAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BIAS_OF_THE_DAY__SUMMARY__TIMEOUT_SECS=30` -> `summary.timeout_secs = 30`
    /// - `BIAS_OF_THE_DAY__LOG_LEVEL=debug` -> `log_level = "debug"`
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
                    .prefix("BIAS_OF_THE_DAY")
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
        self.summary.validate()?;
        tracing_subscriber::EnvFilter::try_new(&self.log_level)
            .map_err(|e| ValidationError::InvalidLogLevel(e.to_string()))?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            summary: SummaryConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn,bias_of_the_day=info".to_string()
}
