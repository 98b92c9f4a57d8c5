//! Presentation layer for duet
//!
//! This crate contains the MCP tool surface, CLI definitions
//! and the text formatter for combined model answers.

pub mod cli;
pub mod mcp;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use mcp::server::DuetService;
pub use mcp::tool::{TOOL_NAME, ToolCallError};
pub use output::formatter::TextFormatter;
