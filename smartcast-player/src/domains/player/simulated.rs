//! Stand-in media engine for the terminal client.
//!
//! There is no decoder. A ticker task advances a virtual position while
//! "playing" and reports it the way a real engine would, through the
//! driver's input channel.

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use smartcast_core::playback::{EngineEvent, MediaEngine};
use tokio::task::JoinHandle;

use super::driver::DriverHandle;

#[derive(Debug, Default)]
struct SimState {
    wants_play: bool,
    playing: bool,
    position: f64,
    duration: f64,
    fail_at: Option<f64>,
    failed: bool,
}

#[derive(Debug)]
pub struct SimulatedEngine {
    state: Arc<Mutex<SimState>>,
    events: DriverHandle,
    ticker: Option<JoinHandle<()>>,
}

impl SimulatedEngine {
    /// Spawns the ticker on the current runtime. Playback starts one tick
    /// after `play()`, which stands in for buffering.
    pub fn spawn(duration: f64, tick: Duration, events: DriverHandle) -> Self {
        let state = Arc::new(Mutex::new(SimState {
            duration: duration.max(0.0),
            ..SimState::default()
        }));

        let ticker = tokio::spawn(run_ticker(state.clone(), tick, events.clone()));

        Self {
            state,
            events,
            ticker: Some(ticker),
        }
    }

    /// Reports a network failure once the position reaches `position`.
    pub fn fail_at(self, position: f64) -> Self {
        self.state.lock().fail_at = Some(position);
        self
    }
}

async fn run_ticker(
    state: Arc<Mutex<SimState>>,
    tick: Duration,
    events: DriverHandle,
) {
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let step = tick.as_secs_f64();

    loop {
        interval.tick().await;

        let mut reports = Vec::new();
        {
            let mut sim = state.lock();
            if sim.failed {
                continue;
            }
            if sim.wants_play && !sim.playing {
                sim.playing = true;
                reports.push(EngineEvent::PlayingChanged(true));
            } else if sim.playing {
                sim.position = (sim.position + step).min(sim.duration);
                reports.push(EngineEvent::TimeUpdate {
                    current_time: sim.position,
                    live_duration: Some(sim.duration),
                });

                if sim.fail_at.is_some_and(|at| sim.position >= at) {
                    sim.failed = true;
                    sim.playing = false;
                    sim.wants_play = false;
                    reports.push(EngineEvent::Error(
                        "simulated network failure".to_string(),
                    ));
                } else if sim.position >= sim.duration {
                    sim.playing = false;
                    sim.wants_play = false;
                    reports.push(EngineEvent::PlayingChanged(false));
                }
            }
        }

        for event in reports {
            if !events.engine_event(event) {
                return;
            }
        }
    }
}

impl MediaEngine for SimulatedEngine {
    fn play(&mut self) {
        let mut sim = self.state.lock();
        sim.wants_play = true;
        if sim.failed {
            sim.failed = false;
            sim.fail_at = None;
        }
        if sim.position >= sim.duration && sim.duration > 0.0 {
            sim.position = 0.0;
        }
    }

    fn pause(&mut self) {
        let was_playing = {
            let mut sim = self.state.lock();
            sim.wants_play = false;
            std::mem::replace(&mut sim.playing, false)
        };
        if was_playing {
            self.events.engine_event(EngineEvent::PlayingChanged(false));
        }
    }

    fn seek_by(&mut self, delta_seconds: f64) {
        let position = {
            let mut sim = self.state.lock();
            sim.position = (sim.position + delta_seconds).clamp(0.0, sim.duration);
            sim.position
        };
        self.events.engine_event(EngineEvent::TimeUpdate {
            current_time: position,
            live_duration: None,
        });
    }

    fn release(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for SimulatedEngine {
    fn drop(&mut self) {
        self.release();
    }
}
