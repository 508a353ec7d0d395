//! # SmartCast Core
//!
//! Domain logic shared by the SmartCast catalog server and the client.
//!
//! - [`catalog`]: the immutable, in-memory video catalog and its loaders
//! - [`playback`]: the playback controller, its reducer and the controls
//!   auto-hide timer
//!
//! The controller never talks to a decoder directly. Everything that touches
//! bytes goes through the [`playback::MediaEngine`] trait, and engine
//! notifications come back as [`playback::EngineEvent`]s.
//!
//! ```
//! use smartcast_core::catalog::Catalog;
//!
//! let catalog = Catalog::sample();
//! let record = catalog.get("3").expect("sample catalog has id 3");
//! assert_eq!(record.title, "Tears of Steel");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod error;
pub mod playback;

pub use catalog::Catalog;
pub use error::{CatalogError, PlaybackError};
pub use smartcast_model as model;
