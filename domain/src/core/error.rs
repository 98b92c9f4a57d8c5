//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("No backends configured")]
    NoBackends,

    #[error("Backend name cannot be empty")]
    EmptyBackendName,

    #[error("Model identifier for backend '{0}' cannot be empty")]
    EmptyModel(String),

    #[error("Duplicate backend name: {0}")]
    DuplicateBackend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::NoBackends.to_string(), "No backends configured");
        assert_eq!(
            DomainError::DuplicateBackend("model_a".to_string()).to_string(),
            "Duplicate backend name: model_a"
        );
    }
}
