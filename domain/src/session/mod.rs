//! LLM conversation domain.
//!
//! - [`entities::Message`]: a single message sent to a model
//! - [`entities::Role`]: who authored the message

pub mod entities;
