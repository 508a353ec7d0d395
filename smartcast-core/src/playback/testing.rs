//! Deterministic stand-ins for the media engine and the clock.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::Mutex;

use super::{
    clock::Clock,
    engine::{EngineCommand, MediaEngine},
};

/// Engine that records every command it receives. Clones share the log, so
/// a test can keep one handle after moving another into a controller.
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    inner: Arc<Mutex<Recorded>>,
}

#[derive(Debug, Default)]
struct Recorded {
    commands: Vec<EngineCommand>,
    releases: usize,
}

impl RecordingEngine {
    pub fn commands(&self) -> Vec<EngineCommand> {
        self.inner.lock().commands.clone()
    }

    pub fn release_count(&self) -> usize {
        self.inner.lock().releases
    }
}

impl MediaEngine for RecordingEngine {
    fn play(&mut self) {
        self.inner.lock().commands.push(EngineCommand::Play);
    }

    fn pause(&mut self) {
        self.inner.lock().commands.push(EngineCommand::Pause);
    }

    fn seek_by(&mut self, delta_seconds: f64) {
        self.inner
            .lock()
            .commands
            .push(EngineCommand::SeekBy(delta_seconds));
    }

    fn release(&mut self) {
        self.inner.lock().releases += 1;
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock() += by;
    }

    pub fn elapsed(&self) -> Duration {
        *self.offset.lock()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + *self.offset.lock()
    }
}
