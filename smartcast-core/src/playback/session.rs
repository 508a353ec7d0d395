/// State of one active video view.
///
/// Owned exclusively by a [`super::PlaybackController`]; the only way to get
/// a modified copy is through [`super::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    media_ref: String,
    pub(crate) is_playing: bool,
    pub(crate) position_seconds: f64,
    pub(crate) duration_seconds: f64,
    pub(crate) is_buffering: bool,
    pub(crate) controls_visible: bool,
    pub(crate) error: Option<String>,
}

/// Coarse state for the overlay, derived from the session flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Buffering,
    Playing,
    Paused,
    Failed,
}

impl PlaybackSession {
    /// Fresh session: playing optimistically, buffering, controls up.
    ///
    /// A negative or non-finite hint is treated as unknown (0).
    pub fn started(media_ref: impl Into<String>, duration_hint: f64) -> Self {
        Self {
            media_ref: media_ref.into(),
            is_playing: true,
            position_seconds: 0.0,
            duration_seconds: sanitize_duration(duration_hint),
            is_buffering: true,
            controls_visible: true,
            error: None,
        }
    }

    pub fn media_ref(&self) -> &str {
        &self.media_ref
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn position_seconds(&self) -> f64 {
        self.position_seconds
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn is_buffering(&self) -> bool {
        self.is_buffering
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_known_duration(&self) -> bool {
        self.duration_seconds > 0.0
    }

    /// Fraction of the video played, 0 when the duration is unknown.
    pub fn progress(&self) -> f64 {
        if self.has_known_duration() {
            (self.position_seconds / self.duration_seconds).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.error.is_some() {
            PlaybackStatus::Failed
        } else if self.is_buffering {
            PlaybackStatus::Buffering
        } else if self.is_playing {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Paused
        }
    }

    /// Clamps `position` into `[0, duration]`, or into `[0, f64::MAX]` while
    /// the duration is unknown so repeated seeks cannot overflow to infinity.
    pub(crate) fn clamp_position(&self, position: f64) -> f64 {
        if self.has_known_duration() {
            position.clamp(0.0, self.duration_seconds)
        } else {
            position.max(0.0).min(f64::MAX)
        }
    }
}

pub(crate) fn sanitize_duration(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
