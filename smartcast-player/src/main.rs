use std::{
    io::{BufRead, IsTerminal, Write},
    path::PathBuf,
    time::Duration,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use smartcast_config::{ConfigLoad, ConfigLoader};
use smartcast_model::QualityPreference;
use smartcast_player::{
    ApiClient,
    app::{self, INTERRUPTED_MESSAGE, INTERRUPTED_TITLE, PlayOptions},
};

#[derive(Parser, Debug)]
#[command(name = "smartcast-player")]
#[command(about = "Browse and play the SmartCast catalog from a terminal")]
struct Cli {
    /// Catalog server base URL (overrides config)
    #[arg(long)]
    server: Option<String>,

    /// Path to smartcast.toml
    #[arg(long, env = "SMARTCAST_CONFIG")]
    config: Option<PathBuf>,

    /// Keep settings in memory only
    #[arg(long, default_value_t = false)]
    ephemeral: bool,

    /// Exit on the first error instead of offering a restart
    #[arg(long, default_value_t = false)]
    no_restart: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// List the video library
    List,
    /// Show one video
    Show { id: String },
    /// Show or change settings
    Settings {
        #[arg(long)]
        auto_play_next: Option<bool>,
        #[arg(long)]
        quality: Option<QualityPreference>,
    },
    /// Play a video through the simulated engine
    Play {
        id: String,
        /// Simulated engine tick in milliseconds
        #[arg(long, default_value_t = 1000)]
        tick_ms: u64,
        /// Simulate a network failure at this position (seconds)
        #[arg(long)]
        fail_at: Option<f64>,
    },
}

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("smartcast_player", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    loop {
        match runtime.block_on(run(&cli)) {
            Ok(()) => return Ok(()),
            Err(err) => {
                log::error!("{err:#}");
                eprintln!("{INTERRUPTED_TITLE}\n{INTERRUPTED_MESSAGE}\n  {err:#}");
                if cli.no_restart || !offer_restart()? {
                    return Err(err);
                }
                log::info!("restarting");
            }
        }
    }
}

/// The only recovery from an error that escaped a screen.
fn offer_restart() -> anyhow::Result<bool> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return Ok(false);
    }

    eprint!("Restart SmartCast? [y/N] ");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config.clone() {
        loader = loader.with_config_path(path);
    }
    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;
    for warning in &warnings.items {
        log::debug!("config: {}", warning.message);
    }

    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.player.server_url.clone());
    let client = ApiClient::new(server_url)?;
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Command::List => app::list(&client, &mut stdout).await,
        Command::Show { id } => app::show(&client, id, &mut stdout).await,
        Command::Settings {
            auto_play_next,
            quality,
        } => {
            let mut repository = app::open_settings(&config.player, cli.ephemeral);
            app::settings(&mut repository, *auto_play_next, *quality, &mut stdout)
        }
        Command::Play {
            id,
            tick_ms,
            fail_at,
        } => {
            drop(stdout);
            let options = PlayOptions {
                tick: Duration::from_millis((*tick_ms).max(1)),
                fail_at: *fail_at,
            };
            let exit = app::play(&client, id, &config.player, options).await?;
            log::debug!("player closed: {exit:?}");
            Ok(())
        }
    }
}
