//! Playback bounded context.
//!
//! A [`PlaybackController`] owns exactly one [`PlaybackSession`] for one
//! player view. User intents and media engine notifications are both fed
//! through [`reduce`], which returns the next session together with the
//! engine command to issue and what to do with the controls auto-hide timer.
//!
//! Intents are applied optimistically so the overlay reacts immediately;
//! engine events always overwrite whatever the intents guessed.
//!
//! Everything here is single threaded. Hosts that run on a multi-threaded
//! executor confine the controller to one task (see the client's playback
//! driver) instead of locking it.

pub mod clock;
pub mod controller;
pub mod display;
pub mod engine;
pub mod reducer;
pub mod session;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
pub mod timer;

pub use clock::{Clock, SystemClock};
pub use controller::{ControllerConfig, PlaybackController, TimerOutcome};
pub use engine::{EngineCommand, EngineEvent, MediaEngine};
pub use reducer::{Intent, PlaybackEvent, TimerDirective, Transition, reduce};
pub use session::{PlaybackSession, PlaybackStatus};
pub use timer::AutoHideTimer;

use std::time::Duration;

/// Idle delay before the overlay hides while playing.
pub const DEFAULT_CONTROLS_HIDE_DELAY: Duration = Duration::from_millis(3000);

/// Step used by the on-screen skip buttons.
pub const DEFAULT_SEEK_STEP_SECONDS: f64 = 10.0;
