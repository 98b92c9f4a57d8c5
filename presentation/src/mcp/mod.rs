//! MCP surface: the tool descriptor, argument validation and the server handler.

pub mod server;
pub mod tool;
