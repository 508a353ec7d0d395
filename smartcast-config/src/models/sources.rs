use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    #[serde(default)]
    pub player: FilePlayerConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FilePlayerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls_hide_delay_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seek_step_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_path: Option<PathBuf>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub catalog_path: Option<PathBuf>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub server_url: Option<String>,
    pub controls_hide_delay_ms: Option<u64>,
    pub seek_step_seconds: Option<f64>,
    pub settings_path: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: std::env::var("SMARTCAST_CONFIG")
                .ok()
                .map(PathBuf::from),
            server_host: std::env::var("SERVER_HOST").ok(),
            server_port: parse_var("SERVER_PORT"),
            catalog_path: std::env::var("CATALOG_PATH").ok().map(PathBuf::from),
            cors_allowed_origins: parse_csv_var("CORS_ALLOWED_ORIGINS"),
            server_url: std::env::var("SMARTCAST_SERVER_URL").ok(),
            controls_hide_delay_ms: parse_var("CONTROLS_HIDE_DELAY_MS"),
            seek_step_seconds: parse_var("SEEK_STEP_SECONDS"),
            settings_path: std::env::var("SMARTCAST_SETTINGS_PATH")
                .ok()
                .map(PathBuf::from),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

fn parse_csv_var(name: &str) -> Option<Vec<String>> {
    std::env::var(name).ok().map(|raw| split_csv(&raw))
}

pub(crate) fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_drops_blank_entries() {
        assert_eq!(
            split_csv(" http://a , ,http://b,"),
            vec!["http://a".to_string(), "http://b".to_string()]
        );
    }

    #[test]
    fn file_config_accepts_partial_sections() {
        let file: FileConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [player]
            controls_hide_delay_ms = 1500
            "#,
        )
        .unwrap();
        assert_eq!(file.server.port, Some(8080));
        assert_eq!(file.server.host, None);
        assert_eq!(file.player.controls_hide_delay_ms, Some(1500));
        assert!(file.catalog.path.is_none());
    }
}
