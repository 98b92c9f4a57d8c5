//! OpenRouter session.
//!
//! Provides [`OpenRouterSession`] which implements [`LlmSession`] by pairing a
//! fixed system prompt with each prompt it is asked to send.

use crate::openrouter::client::OpenRouterClient;
use async_trait::async_trait;
use duet_application::{GatewayError, LlmSession};
use duet_domain::{Message, Model};
use std::sync::Arc;

/// A model plus the instructions every request to it carries.
pub struct OpenRouterSession {
    client: Arc<OpenRouterClient>,
    model: Model,
    system_prompt: String,
}

impl OpenRouterSession {
    pub fn new(client: Arc<OpenRouterClient>, model: Model, system_prompt: impl Into<String>) -> Self {
        Self {
            client,
            model,
            system_prompt: system_prompt.into(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

#[async_trait]
impl LlmSession for OpenRouterSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let messages = Message::prompt_pair(self.system_prompt.as_str(), content);
        self.client.complete(&self.model, &messages).await
    }
}
