//! LLM Gateway port
//!
//! Defines the interface for communicating with the model gateway.

use async_trait::async_trait;
use duet_domain::Model;
use thiserror::Error;

/// Errors that can occur during a single backend call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The gateway answered with a non-success status
    #[error("Gateway error for {model}: HTTP {status} - {body}")]
    RequestFailed {
        model: Model,
        status: u16,
        body: String,
    },

    /// The gateway answered successfully but with no usable text
    #[error("No content returned from {0}")]
    EmptyResponse(Model),

    /// The success body could not be decoded
    #[error("Malformed response from {model}: {message}")]
    MalformedResponse { model: Model, message: String },

    /// DNS, connect, timeout or connection reset
    #[error("Transport error for {model}: {message}")]
    Transport { model: Model, message: String },
}

impl GatewayError {
    /// The model whose call failed
    pub fn model(&self) -> &Model {
        match self {
            GatewayError::RequestFailed { model, .. }
            | GatewayError::MalformedResponse { model, .. }
            | GatewayError::Transport { model, .. } => model,
            GatewayError::EmptyResponse(model) => model,
        }
    }

    /// HTTP status, when the gateway produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches models.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a session that sends `system_prompt` ahead of every prompt
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// A configured model conversation
///
/// Sessions keep no history: each `send` is one independent request made of
/// the session's system prompt followed by `content`.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a prompt and get the model's reply text
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message_includes_status_and_body() {
        let err = GatewayError::RequestFailed {
            model: Model::new("openai/gpt-4o"),
            status: 429,
            body: r#"{"error":"rate limited"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("openai/gpt-4o"));
        assert!(msg.contains("rate limited"));
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_model_accessor() {
        let model = Model::new("x/y");
        assert_eq!(GatewayError::EmptyResponse(model.clone()).model(), &model);
        let err = GatewayError::Transport {
            model: model.clone(),
            message: "timed out".to_string(),
        };
        assert_eq!(err.model(), &model);
        assert_eq!(err.status(), None);
    }
}
