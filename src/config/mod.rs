//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BIOCLAVE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use bioclave::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//!
//! println!("Store file: {}", config.storage.file_path().display());
//! # Ok::<(), bioclave::config::ConfigError>(())
//! ```

mod ai;
mod error;
mod payment;
mod runtime;
mod storage;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use runtime::{Environment, RuntimeConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults; only the Gemini API key is required when the
/// Gemini provider is selected. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Runtime configuration (environment, logging)
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Local key-value file location
    #[serde(default)]
    pub storage: StorageConfig,

    /// AI provider configuration (Gemini/mock)
    #[serde(default)]
    pub ai: AiConfig,

    /// Payment configuration (simulated)
    #[serde(default)]
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BIOCLAVE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BIOCLAVE__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    /// - `BIOCLAVE__STORAGE__DATA_DIR=/var/lib/bioclave` -> `storage.data_dir = ...`
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
                    .prefix("BIOCLAVE")
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
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.runtime.validate()?;
        self.storage.validate()?;
        self.ai.validate()?;
        self.payment.validate()?;
        if self.is_production() {
            self.ai.validate_for_production()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}
