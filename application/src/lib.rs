//! Application layer for duet
//!
//! This crate contains the fan-out use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DispatchConfig;
pub use ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
pub use use_cases::query_models::{QueryModelsError, QueryModelsInput, QueryModelsUseCase};
