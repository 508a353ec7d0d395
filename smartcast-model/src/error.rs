use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    EmptyId,
    InvalidRecord { id: String, reason: String },
    UnknownQuality(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::EmptyId => write!(f, "video id must not be empty"),
            ModelError::InvalidRecord { id, reason } => {
                write!(f, "invalid video record {id}: {reason}")
            }
            ModelError::UnknownQuality(raw) => {
                write!(f, "unknown quality preference '{raw}'")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
