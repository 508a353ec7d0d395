//! SmartCast client library
//!
//! Screen models and infrastructure behind the `smartcast-player` binary:
//! the catalog [`api_client`], the library and settings screens under
//! [`domains`], and the playback driver that runs one
//! [`smartcast_core::playback::PlaybackController`] per player view.
//!
//! Everything is headless; the binary renders state as plain text.

pub mod api_client;
pub mod app;
pub mod domains;
pub mod formatting;

pub use api_client::ApiClient;
