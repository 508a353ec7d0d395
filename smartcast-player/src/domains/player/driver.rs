//! Event loop around a [`PlaybackController`].
//!
//! The controller is single threaded, so the driver owns it inside one task
//! and everything else talks to it through a channel. Engine events and user
//! intents share that channel and are applied in arrival order. Between
//! inputs the task sleeps until the controller's next auto-hide deadline.

use std::{sync::Arc, time::Instant};

use smartcast_core::{
    PlaybackError,
    playback::{
        Clock, ControllerConfig, EngineEvent, Intent, MediaEngine,
        PlaybackController, PlaybackSession, TimerOutcome,
    },
};
use tokio::sync::{mpsc, watch};

/// Monotonic clock that follows tokio's time, including a paused test clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DriverInput {
    Intent(Intent),
    Engine(EngineEvent),
    /// The view went away.
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverExit {
    Dismissed,
    /// Every sender was dropped.
    Disconnected,
}

/// Sending half, cloned into the input source and the engine.
#[derive(Debug, Clone)]
pub struct DriverHandle {
    inputs: mpsc::UnboundedSender<DriverInput>,
    snapshots: watch::Receiver<Option<PlaybackSession>>,
}

impl DriverHandle {
    /// Returns false once the driver has exited.
    pub fn send(&self, input: DriverInput) -> bool {
        self.inputs.send(input).is_ok()
    }

    pub fn intent(&self, intent: Intent) -> bool {
        self.send(DriverInput::Intent(intent))
    }

    pub fn engine_event(&self, event: EngineEvent) -> bool {
        self.send(DriverInput::Engine(event))
    }

    pub fn dismiss(&self) -> bool {
        self.send(DriverInput::Dismiss)
    }

    /// Latest published session; `None` before start and after teardown.
    pub fn snapshot(&self) -> Option<PlaybackSession> {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<PlaybackSession>> {
        self.snapshots.clone()
    }
}

/// Receiving half, consumed by [`PlaybackDriver::new`].
#[derive(Debug)]
pub struct DriverInbox {
    inputs: mpsc::UnboundedReceiver<DriverInput>,
    snapshots: watch::Sender<Option<PlaybackSession>>,
}

pub fn driver_channel() -> (DriverHandle, DriverInbox) {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(None);
    (
        DriverHandle {
            inputs: input_tx,
            snapshots: snapshot_rx,
        },
        DriverInbox {
            inputs: input_rx,
            snapshots: snapshot_tx,
        },
    )
}

#[derive(Debug)]
pub struct PlaybackDriver<E: MediaEngine> {
    controller: PlaybackController<E>,
    inbox: DriverInbox,
}

impl<E: MediaEngine> PlaybackDriver<E> {
    pub fn new(engine: E, config: ControllerConfig, inbox: DriverInbox) -> Self {
        Self {
            controller: PlaybackController::with_clock(
                engine,
                config,
                Arc::new(TokioClock),
            ),
            inbox,
        }
    }

    /// Starts playback and runs until dismissed. The controller is torn down
    /// exactly once on every exit path.
    pub async fn run(
        self,
        media_ref: impl Into<String>,
        duration_hint: f64,
    ) -> Result<DriverExit, PlaybackError> {
        let PlaybackDriver {
            mut controller,
            mut inbox,
        } = self;

        let result =
            drive(&mut controller, &mut inbox, media_ref.into(), duration_hint)
                .await;

        controller.teardown();
        inbox.snapshots.send_replace(None);
        result
    }
}

async fn drive<E: MediaEngine>(
    controller: &mut PlaybackController<E>,
    inbox: &mut DriverInbox,
    media_ref: String,
    duration_hint: f64,
) -> Result<DriverExit, PlaybackError> {
    controller.start(media_ref, duration_hint)?;
    publish(controller, inbox);

    loop {
        let deadline = controller.next_deadline();

        tokio::select! {
            biased;

            input = inbox.inputs.recv() => match input {
                Some(DriverInput::Intent(intent)) => apply_intent(controller, intent)?,
                Some(DriverInput::Engine(event)) => controller.on_engine_event(event)?,
                Some(DriverInput::Dismiss) => return Ok(DriverExit::Dismissed),
                None => return Ok(DriverExit::Disconnected),
            },
            _ = sleep_until(deadline) => {
                match controller.poll_timer()? {
                    TimerOutcome::Hidden => log::trace!("controls auto-hidden"),
                    TimerOutcome::KeptVisible => {
                        log::trace!("auto-hide fired while paused, controls kept")
                    }
                    TimerOutcome::NotDue => {}
                }
            }
        }

        publish(controller, inbox);
    }
}

fn apply_intent<E: MediaEngine>(
    controller: &mut PlaybackController<E>,
    intent: Intent,
) -> Result<(), PlaybackError> {
    match intent {
        Intent::TogglePlayPause => controller.toggle_play_pause(),
        Intent::SeekBy(delta) => controller.seek_by(delta),
        Intent::ShowControls => controller.show_controls(),
        Intent::HideControls => controller.hide_controls(),
        Intent::ToggleControls => controller.toggle_controls_visibility(),
    }
}

fn publish<E: MediaEngine>(
    controller: &PlaybackController<E>,
    inbox: &DriverInbox,
) {
    let snapshot = controller.session().ok().cloned();
    inbox.snapshots.send_if_modified(|current| {
        if *current == snapshot {
            false
        } else {
            *current = snapshot;
            true
        }
    });
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline))
                .await
        }
        None => std::future::pending().await,
    }
}
