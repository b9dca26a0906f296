//! Storage Errors
//!
//! Failures of the persisted slot. None of these reach the user: Save logs and
//! drops them, Load logs them and falls back to an empty list.

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage mechanism, e.g. running without a document
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("value of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("serialize failed: {0}")]
    Serialize(String),

    #[error("parse failed: {0}")]
    Parse(String),

    /// The mechanism refused a read or write
    #[error("storage io failed: {0}")]
    Io(String),
}
