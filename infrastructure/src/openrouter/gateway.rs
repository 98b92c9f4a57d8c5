//! OpenRouter LLM Gateway implementation

use crate::openrouter::client::{OpenRouterClient, OpenRouterSettings};
use crate::openrouter::error::Result;
use crate::openrouter::session::OpenRouterSession;
use async_trait::async_trait;
use duet_application::{GatewayError, LlmGateway, LlmSession};
use duet_domain::Model;
use std::sync::Arc;
use tracing::info;

/// LLM Gateway implementation backed by the OpenRouter HTTP API
pub struct OpenRouterGateway {
    client: Arc<OpenRouterClient>,
}

impl OpenRouterGateway {
    /// Create a gateway from connection settings
    pub fn new(settings: OpenRouterSettings) -> Result<Self> {
        let client = OpenRouterClient::new(settings)?;

        info!(
            "OpenRouterGateway initialized (endpoint: {}, timeout: {:?})",
            client.settings().endpoint,
            client.settings().timeout
        );

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Create a gateway around an existing client
    pub fn with_client(client: Arc<OpenRouterClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<OpenRouterClient> {
        &self.client
    }
}

#[async_trait]
impl LlmGateway for OpenRouterGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> std::result::Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenRouterSession::new(
            Arc::clone(&self.client),
            model.clone(),
            system_prompt,
        )))
    }
}
