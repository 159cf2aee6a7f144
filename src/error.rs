//! Error type shared by the stores and the blob persistence layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before any state was touched. The caller re-prompts.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
