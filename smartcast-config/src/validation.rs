use thiserror::Error;
use url::Url;

use super::models::Config;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("catalog file {path} does not exist")]
    MissingCatalog { path: std::path::PathBuf },
    #[error("controls hide delay must be greater than zero")]
    ZeroHideDelay,
    #[error("seek step must be a positive number of seconds, got {0}")]
    InvalidSeekStep(f64),
    #[error("player server URL '{url}' is invalid")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("player server URL '{0}' must use http or https")]
    UnsupportedServerScheme(String),
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if let Some(path) = &config.catalog.path {
        if !path.exists() {
            return Err(ConfigGuardRailError::MissingCatalog {
                path: path.clone(),
            });
        }
    }

    if config.player.controls_hide_delay.is_zero() {
        return Err(ConfigGuardRailError::ZeroHideDelay);
    }

    let step = config.player.seek_step_seconds;
    if !step.is_finite() || step <= 0.0 {
        return Err(ConfigGuardRailError::InvalidSeekStep(step));
    }

    let url = Url::parse(&config.player.server_url).map_err(|source| {
        ConfigGuardRailError::InvalidServerUrl {
            url: config.player.server_url.clone(),
            source,
        }
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigGuardRailError::UnsupportedServerScheme(
            config.player.server_url.clone(),
        ));
    }

    if config.cors.allowed_origins.is_empty() {
        warnings.push_with_hint(
            "No CORS origins configured; browser clients will be rejected",
            "Set CORS_ALLOWED_ORIGINS or add [cors] allowed_origins to smartcast.toml",
        );
    } else if config.cors.is_wildcard_included() {
        warnings.push("CORS allows any origin; the catalog is readable from every site");
    }

    if config.server.port < 1024 {
        warnings.push_with_hint(
            format!("Server port {} is privileged", config.server.port),
            "Binding may require elevated permissions",
        );
    }

    Ok(warnings)
}
