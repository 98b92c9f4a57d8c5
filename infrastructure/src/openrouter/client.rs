//! HTTP client for the OpenRouter chat-completions endpoint.
//!
//! [`OpenRouterClient`] sends exactly one request per call and classifies the
//! outcome into a [`GatewayError`]. It never retries.

use crate::openrouter::error::{OpenRouterError, Result};
use crate::openrouter::protocol::{ChatCompletionRequest, ChatCompletionResponse};
use duet_application::GatewayError;
use duet_domain::{Message, Model};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::{debug, warn};

/// Default chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Default output ceiling in tokens
pub const DEFAULT_MAX_TOKENS: u32 = 6000;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default attribution referer
pub const DEFAULT_REFERER: &str = "https://github.com/duet-mcp/duet";

/// Default attribution title
pub const DEFAULT_TITLE: &str = "Duet MCP Server";

/// Connection settings for the gateway, fixed for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenRouterSettings {
    pub endpoint: String,
    pub api_key: String,
    /// Sent as `HTTP-Referer` for attribution
    pub referer: String,
    /// Sent as `X-Title` for attribution
    pub title: String,
    pub timeout: Duration,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl OpenRouterSettings {
    /// Settings with every default except the credential
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Chat-completions client shared by every session
pub struct OpenRouterClient {
    http: reqwest::Client,
    settings: OpenRouterSettings,
}

impl OpenRouterClient {
    /// Build a client, validating the static headers up front
    pub fn new(settings: OpenRouterSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .default_headers(Self::default_headers(&settings)?)
            .build()?;

        Ok(Self { http, settings })
    }

    pub fn settings(&self) -> &OpenRouterSettings {
        &self.settings
    }

    fn default_headers(settings: &OpenRouterSettings) -> Result<HeaderMap> {
        fn value(name: &'static str, raw: &str) -> Result<HeaderValue> {
            HeaderValue::from_str(raw).map_err(|e| OpenRouterError::InvalidHeader {
                name,
                reason: e.to_string(),
            })
        }

        let mut authorization = value("Authorization", &format!("Bearer {}", settings.api_key))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("HTTP-Referer", value("HTTP-Referer", &settings.referer)?);
        headers.insert("X-Title", value("X-Title", &settings.title)?);
        Ok(headers)
    }

    /// Send one chat completion and return the first choice's text.
    pub async fn complete(
        &self,
        model: &Model,
        messages: &[Message],
    ) -> std::result::Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model,
            messages,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        debug!("Sending {} messages to {}", messages.len(), model);

        let response = self
            .http
            .post(&self.settings.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(model, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(model, e))?;

        if !status.is_success() {
            warn!(model = %model, status = status.as_u16(), body = %body, "Gateway request failed");
            return Err(GatewayError::RequestFailed {
                model: model.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(model = %model, body = %body, "Gateway returned an unreadable body");
            GatewayError::MalformedResponse {
                model: model.clone(),
                message: e.to_string(),
            }
        })?;

        if let Some(usage) = &parsed.usage {
            debug!(
                model = %model,
                prompt_tokens = ?usage.prompt_tokens,
                completion_tokens = ?usage.completion_tokens,
                "Gateway usage"
            );
        }

        match parsed.first_text() {
            Some(text) => Ok(text.to_string()),
            None => {
                warn!(model = %model, body = %body, "Gateway returned no content");
                Err(GatewayError::EmptyResponse(model.clone()))
            }
        }
    }

    fn transport_error(&self, model: &Model, error: reqwest::Error) -> GatewayError {
        let chain = error_chain(&error);
        let message = if error.is_timeout() {
            format!("request timed out after {:?}: {}", self.settings.timeout, chain)
        } else {
            chain
        };

        warn!(model = %model, error = %message, "Gateway transport failure");

        GatewayError::Transport {
            model: model.clone(),
            message,
        }
    }
}

/// Render an error and all of its sources, outermost first
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
