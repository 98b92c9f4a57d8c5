//! Domain layer for duet
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Backend**: a named slot (`model_a`, `model_b`, ...) bound to a gateway model
//! - **Fan-out**: the same prompt and instructions sent to every backend at once
//! - **Dispatch result**: every backend's answer plus metadata; there is no
//!   partial result

pub mod core;
pub mod dispatch;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model, string::truncate};
pub use dispatch::{
    backend::{Backend, BackendSet},
    value_objects::{DispatchMetadata, DispatchResult, ModelResponse, SYSTEM_PROMPT_PREVIEW_CHARS},
};
pub use prompt::PromptTemplate;
pub use session::entities::{Message, Role};
