use smartcast_core::playback::{PlaybackSession, PlaybackStatus};

use crate::formatting::{format_time, progress_bar};

const BAR_WIDTH: usize = 30;

/// One-line text rendering of the player overlay.
pub fn render_overlay(title: &str, session: &PlaybackSession) -> String {
    match session.status() {
        PlaybackStatus::Failed => format!(
            "{title}: playback failed ({}). Press p to retry.",
            session.error().unwrap_or("unknown error")
        ),
        PlaybackStatus::Buffering => format!("{title}: loading..."),
        status if session.controls_visible() => {
            let icon = if status == PlaybackStatus::Playing {
                "||"
            } else {
                "> "
            };
            format!(
                "{icon} {title}  {} / {}  {}",
                format_time(session.position_seconds()),
                format_time(session.duration_seconds()),
                progress_bar(session.progress(), BAR_WIDTH),
            )
        }
        _ => format!("{title}  {}", format_time(session.position_seconds())),
    }
}
