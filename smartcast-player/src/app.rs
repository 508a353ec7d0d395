//! Command implementations behind the `smartcast-player` binary.

use std::{
    io::{BufRead, Write},
    time::Duration,
};

use anyhow::{Context, Result, bail};
use smartcast_config::PlayerConfig;
use smartcast_core::playback::{ControllerConfig, Intent, PlaybackSession};
use smartcast_model::prelude::{QualityPreference, Settings, VideoRecord};
use tokio::sync::watch;

use crate::{
    api_client::ApiClient,
    domains::{
        library::{
            EMPTY_DESCRIPTION, EMPTY_TITLE, LibraryLoadState, LibraryScreen,
            VideoCard,
        },
        player::{
            DriverExit, DriverHandle, DriverInput, PlaybackDriver,
            SimulatedEngine, driver_channel, render_overlay,
        },
        settings::{
            FileStore, KeyValueStore, MemoryStore, SettingsRepository,
            default_store_path, settings_sections,
        },
    },
    formatting::{format_date, format_time},
};

pub const INTERRUPTED_TITLE: &str = "Playback Interrupted";
pub const INTERRUPTED_MESSAGE: &str = "SmartCast encountered an unexpected issue. Please restart to continue streaming.";

pub type DynSettingsRepository = SettingsRepository<Box<dyn KeyValueStore>>;

/// Opens the settings store named in configuration, the platform default,
/// or an in-memory store.
pub fn open_settings(
    config: &PlayerConfig,
    ephemeral: bool,
) -> DynSettingsRepository {
    let store: Box<dyn KeyValueStore> = if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        match config.settings_path.clone().or_else(default_store_path) {
            Some(path) => {
                log::debug!("settings store at {}", path.display());
                Box::new(FileStore::new(path))
            }
            None => {
                log::warn!("no config directory available, settings will not persist");
                Box::new(MemoryStore::new())
            }
        }
    };
    SettingsRepository::load(store)
}

pub async fn list(client: &ApiClient, out: &mut impl Write) -> Result<()> {
    let mut screen = LibraryScreen::new();
    screen.refresh(client).await;
    for line in render_library(&screen) {
        writeln!(out, "{line}")?;
    }
    if let LibraryLoadState::Failed(message) = &screen.load_state {
        bail!("could not load the library: {message}");
    }
    Ok(())
}

pub fn render_library(screen: &LibraryScreen) -> Vec<String> {
    match &screen.load_state {
        LibraryLoadState::Loading => vec!["Loading...".to_string()],
        LibraryLoadState::Empty => {
            vec![EMPTY_TITLE.to_string(), EMPTY_DESCRIPTION.to_string()]
        }
        LibraryLoadState::Failed(message) => vec![format!("Error: {message}")],
        LibraryLoadState::Loaded(videos) => videos
            .iter()
            .map(VideoCard::from)
            .map(|card| {
                format!(
                    "{:>3}  {:<24} {:>8}  {:<6} {}",
                    card.id, card.title, card.duration, card.resolution, card.uploaded
                )
            })
            .collect(),
    }
}

pub async fn show(client: &ApiClient, id: &str, out: &mut impl Write) -> Result<()> {
    let record = fetch_record(client, id).await?;
    for line in render_details(&record) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn render_details(record: &VideoRecord) -> Vec<String> {
    vec![
        record.title.clone(),
        format!(
            "{} | {} | {}",
            format_time(record.duration_hint()),
            record.resolution,
            format_date(record.upload_date)
        ),
        String::new(),
        record.description.clone(),
        String::new(),
        format!("Stream: {}", record.video_url),
    ]
}

pub fn settings(
    repository: &mut DynSettingsRepository,
    auto_play_next: Option<bool>,
    quality: Option<QualityPreference>,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(value) = auto_play_next {
        if let Err(err) = repository.set_auto_play_next(value) {
            writeln!(out, "Could not save Auto-Play Next: {err}")?;
        }
    }
    if let Some(value) = quality {
        if let Err(err) = repository.set_quality_preference(value) {
            writeln!(out, "Could not save quality preference: {err}")?;
        }
    }

    for line in render_settings(repository.current()) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn render_settings(settings: &Settings) -> Vec<String> {
    let mut lines = Vec::new();
    for section in settings_sections(settings) {
        lines.push(section.title.to_string());
        lines.extend(section.rows.iter().map(|row| format!("  {}", row.render())));
        lines.push(String::new());
    }
    lines.push(format!("Quality preference: {}", settings.quality_preference));
    lines
}

async fn fetch_record(client: &ApiClient, id: &str) -> Result<VideoRecord> {
    client
        .get_video(id)
        .await?
        .with_context(|| format!("video {id} not found"))
}

#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Simulated engine tick.
    pub tick: Duration,
    /// Position at which the simulated engine reports a failure.
    pub fail_at: Option<f64>,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            fail_at: None,
        }
    }
}

/// Plays `id` through the simulated engine, reading keys from stdin until
/// `q` or end of input.
pub async fn play(
    client: &ApiClient,
    id: &str,
    player: &PlayerConfig,
    options: PlayOptions,
) -> Result<DriverExit> {
    let record = fetch_record(client, id).await?;
    println!("{}", key_help(player.seek_step_seconds));

    let (handle, inbox) = driver_channel();
    let mut engine =
        SimulatedEngine::spawn(record.duration_hint(), options.tick, handle.clone());
    if let Some(at) = options.fail_at {
        engine = engine.fail_at(at);
    }

    let driver = PlaybackDriver::new(
        engine,
        ControllerConfig {
            controls_hide_delay: player.controls_hide_delay,
        },
        inbox,
    );

    spawn_key_reader(handle.clone(), player.seek_step_seconds);
    let renderer =
        tokio::spawn(render_loop(record.title.clone(), handle.subscribe()));

    let exit = driver
        .run(record.video_url.clone(), record.duration_hint())
        .await
        .context("playback controller failed")?;
    renderer.await.context("overlay renderer panicked")?;

    Ok(exit)
}

pub fn key_help(seek_step: f64) -> String {
    format!(
        "keys: p play/pause, f/b seek +/-{seek_step}s, c toggle controls, q quit"
    )
}

/// Maps one line of input to a driver input.
pub fn parse_key(line: &str, seek_step: f64) -> Option<DriverInput> {
    let input = match line.trim() {
        "p" | "" => DriverInput::Intent(Intent::TogglePlayPause),
        "f" | "l" => DriverInput::Intent(Intent::SeekBy(seek_step)),
        "b" | "j" => DriverInput::Intent(Intent::SeekBy(-seek_step)),
        "c" => DriverInput::Intent(Intent::ToggleControls),
        "s" => DriverInput::Intent(Intent::ShowControls),
        "h" => DriverInput::Intent(Intent::HideControls),
        "q" => DriverInput::Dismiss,
        _ => return None,
    };
    Some(input)
}

fn spawn_key_reader(handle: DriverHandle, seek_step: f64) {
    // Blocking stdin gets its own thread so runtime shutdown never waits on it.
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_key(&line, seek_step) {
                Some(input) => {
                    if !handle.send(input) {
                        return;
                    }
                }
                None => println!("{}", key_help(seek_step)),
            }
        }
        handle.dismiss();
    });
}

async fn render_loop(
    title: String,
    mut updates: watch::Receiver<Option<PlaybackSession>>,
) {
    let mut last = String::new();
    while updates.changed().await.is_ok() {
        let line = match updates.borrow_and_update().as_ref() {
            Some(session) => render_overlay(&title, session),
            None => break,
        };
        if line != last {
            println!("{line}");
            last = line;
        }
    }
}
