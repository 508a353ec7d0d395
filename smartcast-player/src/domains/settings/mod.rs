//! Settings persistence and the settings screen.

pub mod repository;
pub mod screen;
pub mod store;

pub use repository::SettingsRepository;
pub use screen::{SettingKind, SettingRow, SettingsSection, settings_sections};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use std::path::PathBuf;

use thiserror::Error;

/// Key under which the settings blob is stored.
pub const SETTINGS_KEY: &str = "@smartcast_settings";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings store {path} is unreadable")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("settings store {path} is not a JSON object")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("stored settings are not valid JSON")]
    CorruptValue(#[source] serde_json::Error),
    #[error("failed to encode settings")]
    Encode(#[source] serde_json::Error),
    #[error("settings store unavailable: {0}")]
    Unavailable(String),
}

/// `$XDG_CONFIG_HOME/smartcast-player/settings.json` or the platform
/// equivalent.
pub fn default_store_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("smartcast-player").join("settings.json"))
}
