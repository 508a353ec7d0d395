use std::path::PathBuf;

use thiserror::Error;

use smartcast_model::ModelError;

/// Failures while building a catalog from an external source.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate video id '{0}' in catalog")]
    DuplicateId(String),

    #[error("video {id} has an invalid {field}: {value}")]
    InvalidUrl {
        id: String,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    InvalidRecord(#[from] ModelError),
}

/// Contract violations of the playback controller.
///
/// None of these describe media failures; those travel as
/// [`crate::playback::EngineEvent::Error`] and end up in the session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    #[error("playback session has been torn down")]
    SessionClosed,

    #[error("no playback session has been started")]
    NoSession,

    #[error("a playback session is already active for {0}")]
    AlreadyStarted(String),

    #[error("invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },
}
