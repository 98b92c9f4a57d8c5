//! Model value object representing a gateway model identifier

use serde::{Deserialize, Serialize};

/// A model identifier known to the gateway (Value Object)
///
/// Identifiers are opaque to this crate: `"openai/gpt-4o"` and
/// `"anthropic/claude-sonnet-4"` are both just strings the gateway routes on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(String);

impl Model {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Default model for the first backend slot
    pub fn default_primary() -> Self {
        Self::new("anthropic/claude-sonnet-4")
    }

    /// Default model for the second backend slot
    pub fn default_secondary() -> Self {
        Self::new("openai/gpt-4o")
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::new(s))
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Model::new(s)
    }
}

impl From<String> for Model {
    fn from(s: String) -> Self {
        Model(s)
    }
}
