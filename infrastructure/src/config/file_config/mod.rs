//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gateway;
mod prompt;
mod scalar;

pub use gateway::FileGatewayConfig;
pub use prompt::FilePromptConfig;

use crate::config::error::{ConfigError, ConfigValidationError};
use crate::openrouter::client::OpenRouterSettings;
use duet_application::DispatchConfig;
use duet_domain::{BackendSet, PromptTemplate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Upstream gateway settings
    pub gateway: FileGatewayConfig,
    /// Backends queried on every call, in reporting order
    pub backends: BackendSet,
    /// Prompt settings
    pub prompt: FilePromptConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let gateway = &self.gateway;

        if gateway.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if !(0.0..=2.0).contains(&gateway.temperature) {
            return Err(ConfigValidationError::InvalidTemperature(gateway.temperature));
        }
        if gateway.max_tokens == 0 {
            return Err(ConfigValidationError::InvalidMaxTokens);
        }
        if gateway.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }

        self.backends.validate()?;
        Ok(())
    }

    /// Build the dispatcher configuration
    pub fn dispatch_config(&self) -> DispatchConfig {
        let system = self
            .prompt
            .system
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(PromptTemplate::default_system());

        DispatchConfig::new(self.backends.clone(), system)
    }

    /// Build the HTTP client settings. Fails when no API key was supplied.
    pub fn openrouter_settings(&self) -> Result<OpenRouterSettings, ConfigError> {
        let api_key = self.gateway.api_key().ok_or(ConfigError::MissingApiKey)?;
        let gateway = &self.gateway;

        Ok(OpenRouterSettings {
            endpoint: gateway.endpoint.clone(),
            api_key: api_key.to_string(),
            referer: gateway.referer.clone(),
            title: gateway.title.clone(),
            timeout: Duration::from_secs(gateway.timeout_seconds),
            temperature: gateway.temperature,
            max_tokens: gateway.max_tokens,
        })
    }

    /// Copy suitable for display, with the API key masked
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.gateway.api_key.is_some() {
            config.gateway.api_key = Some("********".to_string());
        }
        config
    }

    /// Render the merged configuration as TOML with the API key masked
    pub fn to_display_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&self.redacted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duet_domain::{Backend, DomainError, Model};

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(
            config.gateway.endpoint,
            "https://openrouter.ai/api/v1/chat/completions"
        );
        assert_eq!(config.gateway.timeout_seconds, 60);
        assert_eq!(config.gateway.max_tokens, 6000);
        assert_eq!(config.backends, BackendSet::default());
        assert!(config.prompt.system.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gateway]
endpoint = "http://localhost:8080/v1/chat/completions"
timeout_seconds = 30
temperature = 0.2
max_tokens = 1024

[[backends]]
name = "fast"
model = "openai/gpt-4o-mini"

[[backends]]
name = "deep"
model = "anthropic/claude-opus-4"

[[backends]]
name = "open"
model = "meta-llama/llama-3-70b-instruct"

[prompt]
system = "Answer in one paragraph."
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gateway.timeout_seconds, 30);
        assert_eq!(config.gateway.temperature, 0.2);
        // Unset keys keep their defaults
        assert_eq!(config.gateway.title, "Duet MCP Server");
        assert_eq!(config.backends.len(), 3);
        assert_eq!(
            config.backends.models()[2],
            Model::new("meta-llama/llama-3-70b-instruct")
        );
        assert!(config.validate().is_ok());

        let dispatch = config.dispatch_config();
        assert_eq!(dispatch.default_system_prompt, "Answer in one paragraph.");
        assert_eq!(dispatch.backends.len(), 3);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[gateway]\nmax_tokens = 100\n").unwrap();
        assert_eq!(config.gateway.max_tokens, 100);
        assert_eq!(config.backends.len(), 2);
        assert_eq!(
            config.dispatch_config().default_system_prompt,
            PromptTemplate::default_system()
        );
    }

    #[test]
    fn test_empty_system_prompt_keeps_default() {
        let config: FileConfig = toml::from_str("[prompt]\nsystem = \"\"\n").unwrap();
        assert_eq!(
            config.dispatch_config().default_system_prompt,
            PromptTemplate::default_system()
        );
    }

    #[test]
    fn test_validate_gateway_fields() {
        let mut config = FileConfig::default();
        config.gateway.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));

        let mut config = FileConfig::default();
        config.gateway.temperature = 3.5;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTemperature(3.5))
        );

        let mut config = FileConfig::default();
        config.gateway.max_tokens = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidMaxTokens));

        let mut config = FileConfig::default();
        config.gateway.endpoint = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyEndpoint));
    }

    #[test]
    fn test_validate_backends() {
        let mut config = FileConfig::default();
        config.backends = BackendSet::new(vec![
            Backend::new("same", "a/one"),
            Backend::new("same", "b/two"),
        ]);
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::Backends(DomainError::DuplicateBackend(
                "same".to_string()
            )))
        );

        config.backends = BackendSet::new(vec![]);
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::Backends(DomainError::NoBackends))
        );
    }

    #[test]
    fn test_openrouter_settings_requires_api_key() {
        let mut config = FileConfig::default();
        assert!(matches!(
            config.openrouter_settings(),
            Err(ConfigError::MissingApiKey)
        ));

        config.gateway.api_key = Some("   ".to_string());
        assert!(matches!(
            config.openrouter_settings(),
            Err(ConfigError::MissingApiKey)
        ));

        config.gateway.api_key = Some("sk-or-123".to_string());
        config.gateway.timeout_seconds = 15;
        let settings = config.openrouter_settings().unwrap();
        assert_eq!(settings.api_key, "sk-or-123");
        assert_eq!(settings.timeout, Duration::from_secs(15));
        assert_eq!(settings.max_tokens, 6000);
    }

    #[test]
    fn test_redacted_hides_api_key() {
        let mut config = FileConfig::default();
        config.gateway.api_key = Some("sk-or-secret".to_string());

        let shown = config.to_display_toml().unwrap();
        assert!(!shown.contains("sk-or-secret"));
        assert!(shown.contains("********"));
    }
}
