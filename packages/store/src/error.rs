use serde::{Deserialize, Serialize};

/// Failure reported by a [`crate::NoteStore`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum StoreError {
    /// No row matched the requested id.
    #[error("note not found")]
    NotFound,
    /// The request was rejected before reaching the table.
    #[error("invalid note: {0}")]
    Invalid(String),
    /// Transport, database or decoding failure, carrying the backend's message.
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}
