//! Configuration errors

use duet_domain::DomainError;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("gateway.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("gateway.temperature must be between 0.0 and 2.0, got {0}")]
    InvalidTemperature(f64),

    #[error("gateway.max_tokens cannot be 0")]
    InvalidMaxTokens,

    #[error("gateway.endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("backends: {0}")]
    Backends(#[from] DomainError),
}

/// Errors raised while turning configuration sources into runtime settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENROUTER_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}
