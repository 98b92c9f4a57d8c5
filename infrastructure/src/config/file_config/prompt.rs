//! Prompt configuration from TOML (`[prompt]` section)

use serde::{Deserialize, Serialize};

/// Prompt configuration
///
/// ```toml
/// [prompt]
/// system = "You are a terse reviewer."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    /// Replaces the built-in default system prompt
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::scalar::optional_string"
    )]
    pub system: Option<String>,
}
