//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum NavError {
    /// A chord pattern could not be parsed
    #[error("Invalid key chord '{pattern}': {reason}")]
    InvalidChord { pattern: String, reason: String },

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl NavError {
    pub(crate) fn invalid_chord(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidChord {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether it is expected behavior (user input mistakes and the like), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidChord { .. } => true,
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Core layer Result type alias
pub type NavResult<T> = std::result::Result<T, NavError>;
