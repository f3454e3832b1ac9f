//! Error types for CircleGroups

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Editing errors
    #[error("Invalid coordinates '{input}': expected three numbers, e.g. '1.2, -3.4, 5.6'")]
    CoordinateFormat { input: String },

    #[error("No group is being edited")]
    NoActiveGroup,

    #[error("Point index {index} out of range for group with {len} points")]
    PointIndexOutOfRange { index: usize, len: usize },

    // Lookup errors
    #[error("Group not found: {id}")]
    GroupNotFound { id: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
