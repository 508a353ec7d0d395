//! Player view: one playback controller driven by a tokio task.

pub mod driver;
pub mod overlay;
pub mod simulated;

pub use driver::{
    DriverExit, DriverHandle, DriverInbox, DriverInput, PlaybackDriver,
    TokioClock, driver_channel,
};
pub use overlay::render_overlay;
pub use simulated::SimulatedEngine;
