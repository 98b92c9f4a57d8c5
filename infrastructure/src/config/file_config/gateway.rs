//! Upstream gateway configuration from TOML (`[gateway]` section)

use crate::openrouter::client::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_REFERER, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TITLE,
};
use serde::{Deserialize, Serialize};

/// Upstream gateway configuration
///
/// # Example
///
/// ```toml
/// [gateway]
/// endpoint = "https://openrouter.ai/api/v1/chat/completions"
/// referer = "https://github.com/duet-mcp/duet"
/// title = "Duet MCP Server"
/// timeout_seconds = 60
/// temperature = 0.7
/// max_tokens = 6000
/// ```
///
/// The API key is never read from files in practice; it arrives through the
/// `OPENROUTER_API_KEY` environment variable and is merged into this section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Chat-completions URL
    #[serde(deserialize_with = "super::scalar::string")]
    pub endpoint: String,
    /// Sent as `HTTP-Referer`
    #[serde(deserialize_with = "super::scalar::string")]
    pub referer: String,
    /// Sent as `X-Title`
    #[serde(deserialize_with = "super::scalar::string")]
    pub title: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
    pub temperature: f64,
    pub max_tokens: u32,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::scalar::optional_string"
    )]
    pub api_key: Option<String>,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            api_key: None,
        }
    }
}

impl FileGatewayConfig {
    /// The API key, if present and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
