//! Configuration loading for duet
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DUET_*` environment variables (`OPENROUTER_API_KEY` for the credential)
//! 2. `--config <path>` specified file
//! 3. Project root: `./duet.toml` or `./.duet.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/duet/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::{ConfigError, ConfigValidationError};
pub use file_config::{FileConfig, FileGatewayConfig, FilePromptConfig};
pub use loader::{API_KEY_ENV, ConfigLoader, ENV_PREFIX};
