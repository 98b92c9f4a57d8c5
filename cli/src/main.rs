//! CLI entrypoint for duet-mcp
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves MCP over stdin/stdout.

use anyhow::{Context, Result};
use clap::Parser;
use duet_application::QueryModelsUseCase;
use duet_infrastructure::{ConfigError, ConfigLoader, FileConfig, OpenRouterGateway};
use duet_presentation::{Cli, DuetService};
use rmcp::{ServiceExt, transport::stdio};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the protocol
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Config problems are reported once here and end the process quietly
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("{}", config.to_display_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let settings = match config.openrouter_settings() {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    info!("Starting duet-mcp v{}", env!("CARGO_PKG_VERSION"));

    // === Dependency Injection ===
    let dispatch = config.dispatch_config();
    for backend in &dispatch.backends {
        info!("Backend {} -> {}", backend.name, backend.model);
    }

    let gateway = Arc::new(
        OpenRouterGateway::new(settings).context("Failed to create OpenRouter gateway")?,
    );
    let use_case = QueryModelsUseCase::new(gateway, Arc::new(dispatch));
    let service = DuetService::new(use_case);

    let server = service
        .serve(stdio())
        .await
        .context("Failed to start MCP server on stdio")?;

    info!("MCP server running, waiting for requests...");

    let waiting = server.waiting();
    tokio::pin!(waiting);

    tokio::select! {
        quit = &mut waiting => {
            let reason = quit.context("MCP service terminated abnormally")?;
            info!("MCP channel closed ({:?})", reason);
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("MCP server shutting down");
    Ok(ExitCode::SUCCESS)
}

fn load_config(cli: &Cli) -> Result<FileConfig, ConfigError> {
    if cli.no_config {
        ConfigLoader::load_env_only()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_no_config_without_key_fails_on_settings() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("duet.toml", "[gateway]\napi_key = \"sk-from-file\"\n")?;

            let cli = Cli::try_parse_from(["duet-mcp", "--no-config"]).unwrap();
            let config = load_config(&cli).unwrap();
            assert!(matches!(
                config.openrouter_settings(),
                Err(ConfigError::MissingApiKey)
            ));
            Ok(())
        });
    }

    #[test]
    fn test_bad_explicit_config_is_returned_not_logged() {
        Jail::expect_with(|jail| {
            jail.clear_env();

            let cli = Cli::try_parse_from(["duet-mcp", "--config", "absent.toml"]).unwrap();
            let err = load_config(&cli).unwrap_err();
            assert!(matches!(err, ConfigError::Load(_)));
            assert!(err.to_string().contains("absent.toml"));
            Ok(())
        });
    }
}
