//! Dispatch value objects - immutable result types for a fan-out.
//!
//! - [`ModelResponse`] - one backend's answer
//! - [`DispatchMetadata`] - when it finished, who answered, which instructions were used
//! - [`DispatchResult`] - every backend's answer plus metadata

use crate::core::model::Model;
use crate::core::string::truncate;
use crate::dispatch::backend::Backend;
use serde::{Deserialize, Serialize};

/// Maximum number of characters of the system prompt kept in metadata.
pub const SYSTEM_PROMPT_PREVIEW_CHARS: usize = 100;

/// Response from a single backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// The backend slot that produced this response
    pub backend: Backend,
    /// The response text, verbatim
    pub content: String,
}

impl ModelResponse {
    pub fn new(backend: Backend, content: impl Into<String>) -> Self {
        Self {
            backend,
            content: content.into(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.backend.model
    }
}

/// Diagnostic metadata attached to a successful fan-out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchMetadata {
    /// RFC 3339 completion timestamp
    pub timestamp: String,
    /// Backend name to model mapping, in configured order
    pub backends: Vec<Backend>,
    /// The effective system prompt, truncated for display
    pub system_prompt: String,
}

impl DispatchMetadata {
    /// Build metadata, truncating the system prompt to
    /// [`SYSTEM_PROMPT_PREVIEW_CHARS`] characters.
    pub fn new(timestamp: impl Into<String>, backends: Vec<Backend>, system_prompt: &str) -> Self {
        Self {
            timestamp: timestamp.into(),
            backends,
            system_prompt: truncate(system_prompt, SYSTEM_PROMPT_PREVIEW_CHARS),
        }
    }

    /// Model identifiers in configured order
    pub fn models(&self) -> Vec<&Model> {
        self.backends.iter().map(|b| &b.model).collect()
    }
}

/// Complete result of a fan-out: every backend answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResult {
    /// One response per backend, in configured order
    pub responses: Vec<ModelResponse>,
    pub metadata: DispatchMetadata,
}

impl DispatchResult {
    pub fn new(responses: Vec<ModelResponse>, metadata: DispatchMetadata) -> Self {
        Self {
            responses,
            metadata,
        }
    }

    /// Look up a response by backend name
    pub fn response_for(&self, backend_name: &str) -> Option<&ModelResponse> {
        self.responses.iter().find(|r| r.backend.name == backend_name)
    }
}
