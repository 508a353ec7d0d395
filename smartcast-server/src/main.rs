//! # SmartCast Server
//!
//! Serves the video catalog over HTTP. Configuration comes from
//! `smartcast.toml`, `.env`, the environment and the flags below, in that
//! order of precedence (lowest first).

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use smartcast_config::{Config, ConfigLoad, ConfigLoader, ConfigWarnings};
use smartcast_core::catalog::{Catalog, CatalogSource};
use smartcast_server::{AppState, create_app};
use std::{net::SocketAddr, path::PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "smartcast-server")]
#[command(about = "Read-only video catalog API for the SmartCast demo")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Path to smartcast.toml
    #[arg(short, long, env = "SMARTCAST_CONFIG")]
    config: Option<PathBuf>,

    /// Environment file loaded instead of `.env` discovery
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// JSON catalog replacing the bundled samples (overrides config)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load configuration and catalog, report problems, and exit
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ConfigLoad {
        mut config,
        warnings,
    } = config_loader(&cli.serve)
        .load()
        .context("failed to load configuration")?;
    apply_overrides(&cli.serve, &mut config);

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "loaded configuration file");
    }
    log_warnings(&warnings);

    let source = CatalogSource::from_optional_path(config.catalog.path.clone());
    let catalog = Catalog::load(&source).context("failed to load catalog")?;

    if let Some(Command::CheckConfig) = cli.command {
        println!("{}", check_config_report(&config, &catalog));
        return Ok(());
    }

    if catalog.is_empty() {
        warn!("catalog is empty; /api/videos will return []");
    }

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("invalid bind address {}", config.bind_address()))?;

    let state = AppState::new(catalog, config);
    let app = create_app(state);

    info!("Starting SmartCast catalog server on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

fn config_loader(args: &ServeArgs) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if let Some(path) = args.config.clone() {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = args.env_file.clone() {
        loader = loader.with_env_file(path);
    }
    loader
}

/// Flags win over every other configuration source.
fn apply_overrides(args: &ServeArgs, config: &mut Config) {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    if let Some(catalog) = args.catalog.clone() {
        config.catalog.path = Some(catalog);
    }
}

fn check_config_report(config: &Config, catalog: &Catalog) -> String {
    format!(
        "configuration ok: {} videos, listening on {}",
        catalog.len(),
        config.bind_address()
    )
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => warn!(hint = %hint, "{}", warning.message),
            None => warn!("{}", warning.message),
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcast_config::EnvConfig;

    fn default_config() -> Config {
        ConfigLoader::new()
            .load_with_env(EnvConfig::default(), false)
            .unwrap()
            .config
    }

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("smartcast-server").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_override_loaded_config() {
        let cli = parse(&[
            "--port",
            "8123",
            "--host",
            "127.0.0.1",
            "--catalog",
            "/srv/videos.json",
        ]);
        let mut config = default_config();
        apply_overrides(&cli.serve, &mut config);

        assert_eq!(config.server.port, 8123);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(
            config.catalog.path.as_deref(),
            Some(std::path::Path::new("/srv/videos.json"))
        );
        assert_eq!(config.bind_address(), "127.0.0.1:8123");
    }

    #[test]
    fn absent_flags_leave_config_untouched() {
        let cli = parse(&[]);
        let mut config = default_config();
        apply_overrides(&cli.serve, &mut config);

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.catalog.path.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_config_reports_catalog_and_address() {
        let cli = parse(&["--port", "7000", "check-config"]);
        assert!(matches!(cli.command, Some(Command::CheckConfig)));

        let mut config = default_config();
        apply_overrides(&cli.serve, &mut config);
        let catalog =
            Catalog::load(&CatalogSource::from_optional_path(None)).unwrap();

        assert_eq!(
            check_config_report(&config, &catalog),
            "configuration ok: 6 videos, listening on 0.0.0.0:7000"
        );
    }
}
