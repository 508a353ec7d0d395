//! Core data model definitions shared across SmartCast crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod prelude;
pub mod settings;
pub mod video;

// Re-exports for downstream crates.
pub use error::{ModelError, Result as ModelResult};
pub use ids::VideoId;
pub use settings::{QualityPreference, Settings};
pub use video::VideoRecord;
