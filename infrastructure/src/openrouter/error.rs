//! Error types for the OpenRouter adapter

use thiserror::Error;

/// Result type alias for adapter construction
pub type Result<T> = std::result::Result<T, OpenRouterError>;

/// Errors raised while setting up the OpenRouter adapter.
///
/// Per-request failures are reported as
/// [`GatewayError`](duet_application::GatewayError) instead.
#[derive(Error, Debug)]
pub enum OpenRouterError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid header value for {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },
}
