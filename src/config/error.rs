//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),

    #[error("Data directory must not be empty")]
    EmptyDataDir,

    #[error("Store file name must be a plain file name")]
    InvalidFileName,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Model name must not be empty")]
    EmptyModel,

    #[error("Invalid AI base URL")]
    InvalidBaseUrl,

    #[error("AI base URL must use HTTPS in production")]
    BaseUrlMustBeHttps,

    #[error("Mock AI provider is not allowed in production")]
    MockProviderInProduction,

    #[error("Simulated payment delay exceeds 60 seconds")]
    PaymentDelayTooLong,
}
