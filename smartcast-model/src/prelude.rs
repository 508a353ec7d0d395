//! Client focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in smartcast-player or other presentation layers.

pub use super::error::ModelError;
pub use super::ids::VideoId;
pub use super::settings::{QualityPreference, Settings};
pub use super::video::VideoRecord;
