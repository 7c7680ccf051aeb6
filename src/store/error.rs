//! Store error types
//!
//! Defines all errors that can occur in the storage layer.

use thiserror::Error;

use super::lifecycle::ContentAction;
use super::types::Status;

/// Errors that can occur in the store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted JSON could not be parsed or written
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The key-value backend refused the operation
    #[error("Backend error: {0}")]
    Backend(String),

    /// The content lifecycle does not allow this action from the current status
    #[error("Cannot {action} content {id} while it is {from}")]
    InvalidTransition {
        id: String,
        from: Status,
        action: ContentAction,
    },
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
