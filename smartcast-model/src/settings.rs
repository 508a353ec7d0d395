use std::{fmt, str::FromStr};

use crate::error::ModelError;

/// Preferred stream quality. Only persisted today; no adaptive logic reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QualityPreference {
    #[default]
    Auto,
    High,
    Medium,
    Low,
}

impl QualityPreference {
    pub const ALL: [QualityPreference; 4] = [
        QualityPreference::Auto,
        QualityPreference::High,
        QualityPreference::Medium,
        QualityPreference::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreference::Auto => "auto",
            QualityPreference::High => "high",
            QualityPreference::Medium => "medium",
            QualityPreference::Low => "low",
        }
    }
}

impl fmt::Display for QualityPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityPreference {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QualityPreference::ALL
            .into_iter()
            .find(|q| q.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownQuality(s.to_string()))
    }
}

/// User settings persisted by the client as a single JSON blob.
///
/// Missing fields fall back to their defaults when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Settings {
    pub auto_play_next: bool,
    pub quality_preference: QualityPreference,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_play_next: true,
            quality_preference: QualityPreference::Auto,
        }
    }
}
