use tracing::{debug, warn};

use super::{
    engine::{EngineCommand, EngineEvent},
    session::{PlaybackSession, sanitize_duration},
};

/// Something the user asked for through the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    TogglePlayPause,
    SeekBy(f64),
    ShowControls,
    HideControls,
    ToggleControls,
}

/// Input to [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    Intent(Intent),
    Engine(EngineEvent),
    /// The auto-hide deadline passed.
    AutoHideElapsed,
}

impl From<Intent> for PlaybackEvent {
    fn from(intent: Intent) -> Self {
        PlaybackEvent::Intent(intent)
    }
}

impl From<EngineEvent> for PlaybackEvent {
    fn from(event: EngineEvent) -> Self {
        PlaybackEvent::Engine(event)
    }
}

/// What to do with the auto-hide timer after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerDirective {
    Keep,
    Arm,
    Cancel,
}

/// Result of [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub session: PlaybackSession,
    pub command: Option<EngineCommand>,
    pub timer: TimerDirective,
}

impl Transition {
    fn new(session: PlaybackSession) -> Self {
        Self {
            session,
            command: None,
            timer: TimerDirective::Keep,
        }
    }

    fn command(mut self, command: EngineCommand) -> Self {
        self.command = Some(command);
        self
    }

    fn timer(mut self, timer: TimerDirective) -> Self {
        self.timer = timer;
        self
    }
}

/// Computes the next session for `event`.
///
/// Pure: no clock, no engine. The caller issues `command` and applies
/// `timer` afterwards.
pub fn reduce(session: &PlaybackSession, event: &PlaybackEvent) -> Transition {
    let mut next = session.clone();

    match event {
        PlaybackEvent::Intent(intent) => reduce_intent(next, *intent),
        PlaybackEvent::Engine(event) => {
            reduce_engine(&mut next, event);
            let timer = match event {
                EngineEvent::Error(_) => TimerDirective::Cancel,
                _ => TimerDirective::Keep,
            };
            Transition::new(next).timer(timer)
        }
        PlaybackEvent::AutoHideElapsed => {
            // is_playing is read now, not when the timer was armed.
            if next.is_playing && next.controls_visible {
                next.controls_visible = false;
                debug!(media = %next.media_ref(), "controls auto-hidden");
            }
            Transition::new(next)
        }
    }
}

fn reduce_intent(mut next: PlaybackSession, intent: Intent) -> Transition {
    match intent {
        Intent::TogglePlayPause => {
            let command = if next.is_playing {
                next.is_playing = false;
                EngineCommand::Pause
            } else {
                next.is_playing = true;
                if next.error.take().is_some() {
                    // Retrying after a failure waits for the engine again.
                    next.is_buffering = true;
                }
                EngineCommand::Play
            };
            next.controls_visible = true;
            Transition::new(next)
                .command(command)
                .timer(TimerDirective::Arm)
        }
        Intent::SeekBy(delta) => {
            let current = next.position_seconds;
            let target = next.clamp_position(current + delta);
            // Without a duration the engine clamps; send the raw delta.
            let sent = if next.has_known_duration() {
                target - current
            } else {
                delta
            };
            next.position_seconds = target;
            next.controls_visible = true;
            Transition::new(next)
                .command(EngineCommand::SeekBy(sent))
                .timer(TimerDirective::Arm)
        }
        Intent::ShowControls => {
            next.controls_visible = true;
            Transition::new(next).timer(TimerDirective::Arm)
        }
        Intent::HideControls => {
            next.controls_visible = false;
            Transition::new(next).timer(TimerDirective::Cancel)
        }
        Intent::ToggleControls => {
            let intent = if next.controls_visible {
                Intent::HideControls
            } else {
                Intent::ShowControls
            };
            reduce_intent(next, intent)
        }
    }
}

fn reduce_engine(next: &mut PlaybackSession, event: &EngineEvent) {
    match event {
        EngineEvent::PlayingChanged(playing) => {
            next.is_playing = *playing;
            if *playing {
                next.is_buffering = false;
                next.error = None;
            }
        }
        EngineEvent::TimeUpdate {
            current_time,
            live_duration,
        } => {
            if let Some(reported) = live_duration {
                let reported = sanitize_duration(*reported);
                if reported > next.duration_seconds {
                    debug!(
                        previous = next.duration_seconds,
                        reported, "duration widened by engine"
                    );
                    next.duration_seconds = reported;
                }
            }

            if !current_time.is_finite() {
                warn!(
                    media = %next.media_ref(),
                    "ignoring non-finite engine time report"
                );
                return;
            }

            let clamped = next.clamp_position(*current_time);
            if clamped != *current_time {
                warn!(
                    reported = *current_time,
                    clamped,
                    duration = next.duration_seconds,
                    "engine time report outside [0, duration], clamping"
                );
            }
            next.position_seconds = clamped;
        }
        EngineEvent::Error(message) => {
            warn!(media = %next.media_ref(), error = %message, "media engine failed");
            next.error = Some(message.clone());
            next.is_playing = false;
            next.is_buffering = false;
            next.controls_visible = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(duration: f64) -> PlaybackSession {
        PlaybackSession::started("https://cdn/video.mp4", duration)
    }

    fn apply(session: &PlaybackSession, event: impl Into<PlaybackEvent>) -> Transition {
        reduce(session, &event.into())
    }

    fn time(current_time: f64, live_duration: Option<f64>) -> EngineEvent {
        EngineEvent::TimeUpdate {
            current_time,
            live_duration,
        }
    }

    #[test]
    fn toggle_alternates_and_issues_matching_command() {
        let mut current = session(100.0);
        let mut expected_playing = true;
        for _ in 0..5 {
            let t = apply(&current, Intent::TogglePlayPause);
            expected_playing = !expected_playing;
            assert_eq!(t.session.is_playing(), expected_playing);
            let expected = if expected_playing {
                EngineCommand::Play
            } else {
                EngineCommand::Pause
            };
            assert_eq!(t.command, Some(expected));
            assert_eq!(t.timer, TimerDirective::Arm);
            current = t.session;
        }
    }

    #[test]
    fn seek_is_clamped_into_known_duration() {
        let mut current = session(30.0);
        current.position_seconds = 25.0;

        let forward = apply(&current, Intent::SeekBy(10.0));
        assert_eq!(forward.session.position_seconds(), 30.0);
        assert_eq!(forward.command, Some(EngineCommand::SeekBy(5.0)));

        let mut current = forward.session;
        current.position_seconds = 4.0;
        let back = apply(&current, Intent::SeekBy(-10.0));
        assert_eq!(back.session.position_seconds(), 0.0);
        assert_eq!(back.command, Some(EngineCommand::SeekBy(-4.0)));
    }

    #[test]
    fn clamping_law_holds_for_arbitrary_deltas() {
        let deltas = [-1e9, -734.5, -10.0, -0.25, 0.0, 0.5, 10.0, 733.9, 1e9];
        for start in [0.0, 1.0, 367.0, 734.0] {
            for delta in deltas {
                let mut current = session(734.0);
                current.position_seconds = start;
                let t = apply(&current, Intent::SeekBy(delta));
                let position = t.session.position_seconds();
                assert!(
                    (0.0..=734.0).contains(&position),
                    "start {start} delta {delta} gave {position}"
                );
            }
        }
    }

    #[test]
    fn seek_without_duration_passes_delta_through() {
        let current = session(0.0);
        let t = apply(&current, Intent::SeekBy(-10.0));
        assert_eq!(t.command, Some(EngineCommand::SeekBy(-10.0)));
        assert_eq!(t.session.position_seconds(), 0.0);

        let t = apply(&t.session, Intent::SeekBy(42.0));
        assert_eq!(t.session.position_seconds(), 42.0);
    }

    #[test]
    fn huge_seeks_without_duration_stay_finite() {
        let mut current = session(0.0);
        for delta in [f64::MAX, f64::MAX, -10.0] {
            current = apply(&current, Intent::SeekBy(delta)).session;
            let position = current.position_seconds();
            assert!(position.is_finite(), "delta {delta} gave {position}");
        }
        assert!(current.position_seconds() > 0.0);
    }

    #[test]
    fn playing_change_to_true_always_clears_buffering() {
        for playing_before in [true, false] {
            let mut current = session(10.0);
            current.is_playing = playing_before;
            let t = apply(&current, EngineEvent::PlayingChanged(true));
            assert!(!t.session.is_buffering());
            assert!(t.session.is_playing());
        }
    }

    #[test]
    fn playing_change_to_false_keeps_buffering() {
        let t = apply(&session(10.0), EngineEvent::PlayingChanged(false));
        assert!(t.session.is_buffering());
        assert!(!t.session.is_playing());
        assert_eq!(t.command, None);
    }

    #[test]
    fn engine_overrides_optimistic_intent() {
        let paused = apply(&session(10.0), Intent::TogglePlayPause).session;
        assert!(!paused.is_playing());
        let t = apply(&paused, EngineEvent::PlayingChanged(true));
        assert!(t.session.is_playing());
    }

    #[test]
    fn duration_only_widens() {
        let current = session(100.0);
        let shorter = apply(&current, time(5.0, Some(90.0)));
        assert_eq!(shorter.session.duration_seconds(), 100.0);

        let longer = apply(&shorter.session, time(6.0, Some(120.5)));
        assert_eq!(longer.session.duration_seconds(), 120.5);
        assert_eq!(longer.session.position_seconds(), 6.0);
    }

    #[test]
    fn time_past_duration_is_clamped() {
        let t = apply(&session(100.0), time(150.0, None));
        assert_eq!(t.session.position_seconds(), 100.0);

        let t = apply(&session(100.0), time(-3.0, None));
        assert_eq!(t.session.position_seconds(), 0.0);
    }

    #[test]
    fn widened_duration_is_applied_before_clamping() {
        let t = apply(&session(100.0), time(110.0, Some(120.0)));
        assert_eq!(t.session.position_seconds(), 110.0);
    }

    #[test]
    fn non_finite_time_is_ignored() {
        let mut current = session(100.0);
        current.position_seconds = 12.0;
        let t = apply(&current, time(f64::NAN, None));
        assert_eq!(t.session.position_seconds(), 12.0);
    }

    #[test]
    fn auto_hide_rechecks_playing_at_fire_time() {
        let playing = session(10.0);
        let t = apply(&playing, PlaybackEvent::AutoHideElapsed);
        assert!(!t.session.controls_visible());

        let paused = apply(&playing, Intent::TogglePlayPause).session;
        let t = apply(&paused, PlaybackEvent::AutoHideElapsed);
        assert!(t.session.controls_visible());
    }

    #[test]
    fn toggle_controls_flips_visibility_and_timer() {
        let hidden = apply(&session(10.0), Intent::ToggleControls);
        assert!(!hidden.session.controls_visible());
        assert_eq!(hidden.timer, TimerDirective::Cancel);

        let shown = apply(&hidden.session, Intent::ToggleControls);
        assert!(shown.session.controls_visible());
        assert_eq!(shown.timer, TimerDirective::Arm);
    }

    #[test]
    fn engine_error_is_recorded_and_retry_clears_it() {
        let failed = apply(&session(10.0), EngineEvent::Error("404".into()));
        assert_eq!(failed.session.error(), Some("404"));
        assert!(!failed.session.is_playing());
        assert!(!failed.session.is_buffering());
        assert!(failed.session.controls_visible());
        assert_eq!(failed.timer, TimerDirective::Cancel);

        let retry = apply(&failed.session, Intent::TogglePlayPause);
        assert_eq!(retry.command, Some(EngineCommand::Play));
        assert_eq!(retry.session.error(), None);
        assert!(retry.session.is_buffering());
    }
}
