use smartcast_model::Settings;

pub const APP_VERSION: &str = "1.0.0";
pub const REPOSITORY_URL: &str = "https://github.com";

/// What a row shows and how it reacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingKind {
    Toggle { value: bool },
    Navigation { value: Option<String>, link: String },
    Info { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRow {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub kind: SettingKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSection {
    pub title: &'static str,
    pub rows: Vec<SettingRow>,
}

pub fn settings_sections(settings: &Settings) -> Vec<SettingsSection> {
    vec![
        SettingsSection {
            title: "PLAYBACK",
            rows: vec![SettingRow {
                icon: "play-circle",
                title: "Auto-Play Next",
                subtitle: Some("Automatically play the next video"),
                kind: SettingKind::Toggle {
                    value: settings.auto_play_next,
                },
            }],
        },
        SettingsSection {
            title: "DISPLAY",
            rows: vec![SettingRow {
                icon: "moon",
                title: "Theme",
                subtitle: None,
                kind: SettingKind::Info {
                    value: "Dark".to_string(),
                },
            }],
        },
        SettingsSection {
            title: "ABOUT",
            rows: vec![
                SettingRow {
                    icon: "info",
                    title: "Version",
                    subtitle: None,
                    kind: SettingKind::Info {
                        value: APP_VERSION.to_string(),
                    },
                },
                SettingRow {
                    icon: "github",
                    title: "GitHub Repository",
                    subtitle: Some("View source code"),
                    kind: SettingKind::Navigation {
                        value: None,
                        link: REPOSITORY_URL.to_string(),
                    },
                },
            ],
        },
    ]
}

impl SettingRow {
    /// Single-line text rendering.
    pub fn render(&self) -> String {
        let value = match &self.kind {
            SettingKind::Toggle { value: true } => "[on]".to_string(),
            SettingKind::Toggle { value: false } => "[off]".to_string(),
            SettingKind::Navigation { value, link } => match value {
                Some(value) => format!("{value} > {link}"),
                None => format!("> {link}"),
            },
            SettingKind::Info { value } => value.clone(),
        };
        match self.subtitle {
            Some(subtitle) => format!("{:<20} {:<24} ({subtitle})", self.title, value),
            None => format!("{:<20} {value}", self.title),
        }
    }
}
