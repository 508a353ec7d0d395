/// Gateway to the platform media engine that actually fetches, decodes and
/// renders the stream.
///
/// Commands are fire-and-forget. The engine reports back asynchronously
/// through [`EngineEvent`]s, which the host hands to the controller in the
/// order they were produced.
pub trait MediaEngine {
    fn play(&mut self);

    fn pause(&mut self);

    fn seek_by(&mut self, delta_seconds: f64);

    /// Called once when the owning session is torn down.
    fn release(&mut self) {}
}

/// Command the controller wants the engine to execute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCommand {
    Play,
    Pause,
    SeekBy(f64),
}

impl EngineCommand {
    pub fn dispatch<E: MediaEngine + ?Sized>(self, engine: &mut E) {
        match self {
            EngineCommand::Play => engine.play(),
            EngineCommand::Pause => engine.pause(),
            EngineCommand::SeekBy(delta) => engine.seek_by(delta),
        }
    }
}

/// Notification from the engine. These are authoritative.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    PlayingChanged(bool),
    TimeUpdate {
        current_time: f64,
        /// Revised total for streamed content, when the engine knows better.
        live_duration: Option<f64>,
    },
    /// Network or decode failure. The engine stops on its own.
    Error(String),
}

impl<E: MediaEngine + ?Sized> MediaEngine for Box<E> {
    fn play(&mut self) {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn seek_by(&mut self, delta_seconds: f64) {
        (**self).seek_by(delta_seconds)
    }

    fn release(&mut self) {
        (**self).release()
    }
}
