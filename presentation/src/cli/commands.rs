//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for duet-mcp
#[derive(Parser, Debug)]
#[command(name = "duet-mcp")]
#[command(author, version, about = "MCP server that asks two models the same question at once")]
#[command(long_about = r#"
Duet is an MCP server speaking JSON-RPC over stdin/stdout. It exposes one tool,
query_dual_models, which sends a prompt to every configured model through
OpenRouter concurrently and returns their answers side by side.

OPENROUTER_API_KEY must be set in the environment.

Configuration files are loaded from (in priority order):
1. DUET_* environment variables   e.g. DUET_GATEWAY__TIMEOUT_SECONDS=30
2. --config <path>                Explicit config file
3. ./duet.toml                    Project-level config
4. ~/.config/duet/config.toml     Global config

Logs go to stderr; stdout carries the protocol.
"#)]
pub struct Cli {
    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
