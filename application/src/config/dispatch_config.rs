//! Dispatch configuration: what every fan-out is built from.
//!
//! [`DispatchConfig`] is assembled once at startup and handed to
//! [`QueryModelsUseCase`](crate::use_cases::query_models::QueryModelsUseCase).
//! It is read-only for the lifetime of the process.

use duet_domain::{BackendSet, DomainError, PromptTemplate};

/// Backends to query and the instructions used when the caller gives none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Backends queried on every invocation, in reporting order.
    pub backends: BackendSet,
    /// System prompt used when the caller supplies no (or an empty) override.
    pub default_system_prompt: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            backends: BackendSet::default(),
            default_system_prompt: PromptTemplate::default_system().to_string(),
        }
    }
}

impl DispatchConfig {
    pub fn new(backends: BackendSet, default_system_prompt: impl Into<String>) -> Self {
        Self {
            backends,
            default_system_prompt: default_system_prompt.into(),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_backends(mut self, backends: BackendSet) -> Self {
        self.backends = backends;
        self
    }

    pub fn with_default_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.default_system_prompt = prompt.into();
        self
    }

    /// Resolve the system prompt for one call
    pub fn effective_system_prompt<'a>(&'a self, override_prompt: Option<&'a str>) -> &'a str {
        PromptTemplate::resolve(override_prompt, &self.default_system_prompt)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.backends.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duet_domain::Backend;

    #[test]
    fn test_default() {
        let config = DispatchConfig::default();
        assert_eq!(config.backends.len(), 2);
        assert_eq!(config.default_system_prompt, PromptTemplate::default_system());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_effective_system_prompt() {
        let config = DispatchConfig::default().with_default_system_prompt("house rules");
        assert_eq!(config.effective_system_prompt(None), "house rules");
        assert_eq!(config.effective_system_prompt(Some("")), "house rules");
        assert_eq!(config.effective_system_prompt(Some("custom")), "custom");
    }

    #[test]
    fn test_validate_rejects_empty_backends() {
        let config = DispatchConfig::default().with_backends(BackendSet::new(vec![]));
        assert_eq!(config.validate(), Err(DomainError::NoBackends));
    }

    #[test]
    fn test_builder() {
        let backends = BackendSet::new(vec![Backend::new("solo", "openai/gpt-4o")]);
        let config = DispatchConfig::new(backends.clone(), "sys");
        assert_eq!(config.backends, backends);
        assert_eq!(config.default_system_prompt, "sys");
    }
}
