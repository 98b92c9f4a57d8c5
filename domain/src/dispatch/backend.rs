//! Backend configuration: which models take part in a fan-out.
//!
//! [`BackendSet`] is a static value object. It is built once at startup and
//! never changes while the server runs.

use crate::core::error::DomainError;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named backend slot (e.g. `model_a`) bound to a gateway model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    /// Logical role name, used to label the backend's section in the output
    pub name: String,
    /// Model queried for this slot
    pub model: Model,
}

impl Backend {
    pub fn new(name: impl Into<String>, model: impl Into<Model>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }

    /// Human-readable label: `model_a` becomes `MODEL A`.
    pub fn label(&self) -> String {
        self.name.replace(['_', '-'], " ").to_uppercase()
    }
}

/// Ordered set of backends queried for every invocation.
///
/// Order is significant: results and metadata are reported in this order
/// regardless of which backend answers first.
///
/// # Example
///
/// ```
/// use duet_domain::{Backend, BackendSet};
///
/// let set = BackendSet::new(vec![
///     Backend::new("fast", "openai/gpt-4o-mini"),
///     Backend::new("deep", "anthropic/claude-opus-4"),
/// ]);
///
/// assert!(set.validate().is_ok());
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendSet(Vec<Backend>);

impl Default for BackendSet {
    fn default() -> Self {
        Self(vec![
            Backend::new("model_a", Model::default_primary()),
            Backend::new("model_b", Model::default_secondary()),
        ])
    }
}

impl BackendSet {
    pub fn new(backends: Vec<Backend>) -> Self {
        Self(backends)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Backend> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Model identifiers in configured order
    pub fn models(&self) -> Vec<Model> {
        self.0.iter().map(|b| b.model.clone()).collect()
    }

    /// Check the set is usable: non-empty, no blank names or models, unique names.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::NoBackends);
        }

        let mut seen = HashSet::new();
        for backend in &self.0 {
            if backend.name.trim().is_empty() {
                return Err(DomainError::EmptyBackendName);
            }
            if backend.model.as_str().trim().is_empty() {
                return Err(DomainError::EmptyModel(backend.name.clone()));
            }
            if !seen.insert(backend.name.as_str()) {
                return Err(DomainError::DuplicateBackend(backend.name.clone()));
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a BackendSet {
    type Item = &'a Backend;
    type IntoIter = std::slice::Iter<'a, Backend>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
