//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_FILENAMES: [&str; 2] = ["duet.toml", ".duet.toml"];

/// Environment variable carrying the upstream credential
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Prefix for environment overrides (`DUET_GATEWAY__TIMEOUT_SECONDS=30`)
pub const ENV_PREFIX: &str = "DUET_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from all sources
    ///
    /// Priority (highest to lowest):
    /// 1. `DUET_*` environment variables and `OPENROUTER_API_KEY`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./duet.toml` or `./.duet.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/duet/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        if let Some(path) = config_path
            && !path.exists()
        {
            return Err(ConfigError::Load(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            )))));
        }

        Self::extract(Self::figment(config_path))
    }

    /// Load defaults plus environment only, skipping every file (for --no-config)
    pub fn load_env_only() -> Result<FileConfig, ConfigError> {
        Self::extract(Self::with_env(Self::defaults()))
    }

    /// The merged provider chain, without extraction
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Self::defaults();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Merging global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            debug!("Merging project config {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            debug!("Merging explicit config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment)
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    fn with_env(figment: Figment) -> Figment {
        let figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        // Read verbatim: a typed env provider would turn `1234` into an integer
        match std::env::var(API_KEY_ENV) {
            Ok(key) => figment.merge(Serialized::default("gateway.api_key", key)),
            Err(_) => figment,
        }
    }

    fn extract(figment: Figment) -> Result<FileConfig, ConfigError> {
        let config: FileConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/duet/config.toml if set,
    /// otherwise falls back to ~/.config/duet/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("duet").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {}, {}*", API_KEY_ENV, ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./duet.toml or ./.duet.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ConfigValidationError;
    use duet_domain::{BackendSet, Model};
    use figment::Jail;

    #[test]
    fn test_defaults_with_api_key_from_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env(API_KEY_ENV, "sk-or-test");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.gateway.api_key(), Some("sk-or-test"));
            assert_eq!(config.backends, BackendSet::default());
            assert_eq!(config.gateway.timeout_seconds, 60);
            Ok(())
        });
    }

    #[test]
    fn test_numeric_looking_api_key_stays_text() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env(API_KEY_ENV, "1234567890");
            jail.set_env("DUET_PROMPT__SYSTEM", "true");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.gateway.api_key(), Some("1234567890"));
            assert_eq!(
                config.openrouter_settings().unwrap().api_key,
                "1234567890"
            );
            assert_eq!(config.dispatch_config().default_system_prompt, "true");
            Ok(())
        });
    }

    #[test]
    fn test_scalar_env_overrides_for_text_fields() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env(API_KEY_ENV, "false");
            jail.set_env("DUET_PROMPT__SYSTEM", "42");
            jail.set_env("DUET_GATEWAY__TITLE", "2024");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.gateway.api_key(), Some("false"));
            assert_eq!(config.prompt.system.as_deref(), Some("42"));
            assert_eq!(config.gateway.title, "2024");
            Ok(())
        });
    }

    #[test]
    fn test_missing_api_key_is_reported_on_conversion() {
        Jail::expect_with(|jail| {
            jail.clear_env();

            let config = ConfigLoader::load(None).unwrap();
            assert!(config.gateway.api_key().is_none());
            assert!(matches!(
                config.openrouter_settings(),
                Err(ConfigError::MissingApiKey)
            ));
            Ok(())
        });
    }

    #[test]
    fn test_project_file_replaces_backends() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "duet.toml",
                r#"
[[backends]]
name = "left"
model = "google/gemini-pro"

[[backends]]
name = "right"
model = "mistralai/mistral-large"
"#,
            )?;

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(
                config.backends.models(),
                vec![
                    Model::new("google/gemini-pro"),
                    Model::new("mistralai/mistral-large")
                ]
            );
            Ok(())
        });
    }

    #[test]
    fn test_hidden_project_file_is_found() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(".duet.toml", "[gateway]\nmax_tokens = 512\n")?;

            assert_eq!(
                ConfigLoader::project_config_path(),
                Some(PathBuf::from(".duet.toml"))
            );
            assert_eq!(ConfigLoader::load(None).unwrap().gateway.max_tokens, 512);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("duet.toml", "[gateway]\ntimeout_seconds = 10\nmax_tokens = 100\n")?;
            jail.create_file("custom.toml", "[gateway]\ntimeout_seconds = 20\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(config.gateway.timeout_seconds, 20);
            assert_eq!(config.gateway.max_tokens, 100);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("duet.toml", "[gateway]\ntimeout_seconds = 10\n")?;
            jail.set_env("DUET_GATEWAY__TIMEOUT_SECONDS", "45");
            jail.set_env("DUET_PROMPT__SYSTEM", "Reply in French.");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.gateway.timeout_seconds, 45);
            assert_eq!(
                config.dispatch_config().default_system_prompt,
                "Reply in French."
            );
            Ok(())
        });
    }

    #[test]
    fn test_no_config_ignores_files() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("duet.toml", "[gateway]\ntimeout_seconds = 10\n")?;
            jail.set_env(API_KEY_ENV, "sk-or-test");

            let config = ConfigLoader::load_env_only().unwrap();
            assert_eq!(config.gateway.timeout_seconds, 60);
            assert_eq!(config.gateway.api_key(), Some("sk-or-test"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("duet.toml", "[gateway]\ntimeout_seconds = 0\n")?;

            assert!(matches!(
                ConfigLoader::load(None),
                Err(ConfigError::Invalid(ConfigValidationError::InvalidTimeout))
            ));
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_load_error() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("duet.toml", "[gateway]\ntimeout_seconds = \"soon\"\n")?;

            assert!(matches!(ConfigLoader::load(None), Err(ConfigError::Load(_))));
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_load_error() {
        Jail::expect_with(|jail| {
            jail.clear_env();

            let err = ConfigLoader::load(Some(Path::new("nope.toml"))).unwrap_err();
            assert!(err.to_string().contains("nope.toml"));
            Ok(())
        });
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_global_file_under_xdg_config_home() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let home = jail.directory().to_path_buf();
            jail.set_env("XDG_CONFIG_HOME", home.display());
            std::fs::create_dir_all(home.join("duet")).unwrap();
            std::fs::write(
                home.join("duet").join("config.toml"),
                "[gateway]\ntitle = \"Global Title\"\nmax_tokens = 300\n",
            )
            .unwrap();
            jail.create_file("duet.toml", "[gateway]\nmax_tokens = 400\n")?;

            assert_eq!(
                ConfigLoader::global_config_path(),
                Some(home.join("duet").join("config.toml"))
            );
            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.gateway.title, "Global Title");
            assert_eq!(config.gateway.max_tokens, 400);
            Ok(())
        });
    }
}
