//! Infrastructure layer for duet
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openrouter;

// Re-export commonly used types
pub use config::{
    API_KEY_ENV, ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileGatewayConfig,
    FilePromptConfig,
};
pub use openrouter::{
    client::{OpenRouterClient, OpenRouterSettings},
    error::{OpenRouterError, Result},
    gateway::OpenRouterGateway,
    session::OpenRouterSession,
};
