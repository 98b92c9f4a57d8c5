//! OpenRouter adapter
//!
//! Implements LlmGateway over the OpenRouter chat-completions HTTP API.

pub mod client;
pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
