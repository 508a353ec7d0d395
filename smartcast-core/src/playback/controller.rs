use std::{
    mem,
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::{debug, info};

use super::{
    DEFAULT_CONTROLS_HIDE_DELAY,
    clock::{Clock, SystemClock},
    engine::{EngineEvent, MediaEngine},
    reducer::{Intent, PlaybackEvent, TimerDirective, reduce},
    session::PlaybackSession,
    timer::AutoHideTimer,
};
use crate::error::PlaybackError;

/// Tunables for a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub controls_hide_delay: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            controls_hide_delay: DEFAULT_CONTROLS_HIDE_DELAY,
        }
    }
}

/// What [`PlaybackController::poll_timer`] observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Nothing pending, or the deadline is still in the future.
    NotDue,
    /// The deadline passed while playing and the controls were hidden.
    Hidden,
    /// The deadline passed while paused; controls stay up.
    KeptVisible,
}

#[derive(Debug)]
enum Lifecycle {
    Idle,
    Active(PlaybackSession),
    Closed,
}

/// Owns one [`PlaybackSession`] and the engine that plays it.
///
/// Lifecycle is `new -> start -> ... -> teardown`. Calling an operation
/// before `start` or after `teardown` is a contract violation and returns an
/// error without touching the engine.
#[derive(Debug)]
pub struct PlaybackController<E: MediaEngine> {
    engine: Option<E>,
    clock: Arc<dyn Clock>,
    timer: AutoHideTimer,
    lifecycle: Lifecycle,
}

impl<E: MediaEngine> PlaybackController<E> {
    pub fn new(engine: E, config: ControllerConfig) -> Self {
        Self::with_clock(engine, config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        engine: E,
        config: ControllerConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            engine: Some(engine),
            clock,
            timer: AutoHideTimer::new(config.controls_hide_delay),
            lifecycle: Lifecycle::Idle,
        }
    }

    /// Creates the session, tells the engine to play and arms the auto-hide
    /// timer.
    pub fn start(
        &mut self,
        media_ref: impl Into<String>,
        initial_duration_hint: f64,
    ) -> Result<(), PlaybackError> {
        match &self.lifecycle {
            Lifecycle::Idle => {}
            Lifecycle::Active(session) => {
                return Err(PlaybackError::AlreadyStarted(
                    session.media_ref().to_string(),
                ));
            }
            Lifecycle::Closed => return Err(PlaybackError::SessionClosed),
        }

        let session =
            PlaybackSession::started(media_ref, initial_duration_hint);
        info!(
            media = %session.media_ref(),
            duration = session.duration_seconds(),
            "playback session started"
        );

        if let Some(engine) = self.engine.as_mut() {
            engine.play();
        }
        self.timer.arm(self.clock.now());
        self.lifecycle = Lifecycle::Active(session);
        Ok(())
    }

    pub fn toggle_play_pause(&mut self) -> Result<(), PlaybackError> {
        self.dispatch(Intent::TogglePlayPause.into())
    }

    pub fn seek_by(&mut self, delta_seconds: f64) -> Result<(), PlaybackError> {
        if !delta_seconds.is_finite() {
            return Err(PlaybackError::InvalidInput {
                field: "seek delta",
                value: delta_seconds,
            });
        }
        self.dispatch(Intent::SeekBy(delta_seconds).into())
    }

    pub fn show_controls(&mut self) -> Result<(), PlaybackError> {
        self.dispatch(Intent::ShowControls.into())
    }

    pub fn hide_controls(&mut self) -> Result<(), PlaybackError> {
        self.dispatch(Intent::HideControls.into())
    }

    pub fn toggle_controls_visibility(&mut self) -> Result<(), PlaybackError> {
        self.dispatch(Intent::ToggleControls.into())
    }

    pub fn on_engine_time_update(
        &mut self,
        current_time: f64,
        reported_duration: Option<f64>,
    ) -> Result<(), PlaybackError> {
        self.on_engine_event(EngineEvent::TimeUpdate {
            current_time,
            live_duration: reported_duration,
        })
    }

    pub fn on_engine_playing_changed(
        &mut self,
        is_playing: bool,
    ) -> Result<(), PlaybackError> {
        self.on_engine_event(EngineEvent::PlayingChanged(is_playing))
    }

    pub fn on_engine_error(
        &mut self,
        message: impl Into<String>,
    ) -> Result<(), PlaybackError> {
        self.on_engine_event(EngineEvent::Error(message.into()))
    }

    pub fn on_engine_event(
        &mut self,
        event: EngineEvent,
    ) -> Result<(), PlaybackError> {
        self.dispatch(event.into())
    }

    /// Fires the auto-hide timer if its deadline has passed.
    pub fn poll_timer(&mut self) -> Result<TimerOutcome, PlaybackError> {
        self.session()?;
        if !self.timer.take_if_due(self.clock.now()) {
            return Ok(TimerOutcome::NotDue);
        }

        self.dispatch(PlaybackEvent::AutoHideElapsed)?;
        let visible = self.session()?.controls_visible();
        Ok(if visible {
            TimerOutcome::KeptVisible
        } else {
            TimerOutcome::Hidden
        })
    }

    /// Deadline the host should wake up at to call [`Self::poll_timer`].
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.lifecycle {
            Lifecycle::Active(_) => self.timer.deadline(),
            Lifecycle::Idle | Lifecycle::Closed => None,
        }
    }

    /// Cancels the timer, releases the engine and drops the session.
    /// Calling it again is a no-op.
    pub fn teardown(&mut self) {
        if matches!(self.lifecycle, Lifecycle::Closed) {
            return;
        }

        self.timer.cancel();
        if let Some(mut engine) = self.engine.take() {
            engine.release();
        }
        if let Lifecycle::Active(session) =
            mem::replace(&mut self.lifecycle, Lifecycle::Closed)
        {
            info!(media = %session.media_ref(), "playback session torn down");
        }
    }

    pub fn session(&self) -> Result<&PlaybackSession, PlaybackError> {
        match &self.lifecycle {
            Lifecycle::Active(session) => Ok(session),
            Lifecycle::Idle => Err(PlaybackError::NoSession),
            Lifecycle::Closed => Err(PlaybackError::SessionClosed),
        }
    }

    pub fn is_torn_down(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Closed)
    }

    pub fn timer(&self) -> &AutoHideTimer {
        &self.timer
    }

    fn dispatch(&mut self, event: PlaybackEvent) -> Result<(), PlaybackError> {
        let session = self.session()?;
        let transition = reduce(session, &event);

        if let (Some(command), Some(engine)) =
            (transition.command, self.engine.as_mut())
        {
            debug!(?command, "issuing engine command");
            command.dispatch(engine);
        }

        match transition.timer {
            TimerDirective::Arm => {
                self.timer.arm(self.clock.now());
            }
            TimerDirective::Cancel => {
                self.timer.cancel();
            }
            TimerDirective::Keep => {}
        }

        self.lifecycle = Lifecycle::Active(transition.session);
        Ok(())
    }
}

impl<E: MediaEngine> Drop for PlaybackController<E> {
    fn drop(&mut self) {
        self.teardown();
    }
}
