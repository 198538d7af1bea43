//! Domain errors for the conveyor adapters.

use thiserror::Error;

/// Domain-level errors that can occur while polling the tracker or
/// posting chat notifications.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Malformed changelog timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Build not found: {0}")]
    BuildNotFound(u64),

    #[error("Unknown build result code: {0}")]
    UnknownResultCode(i64),
}

/// Result alias used throughout the domain and adapter layers.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        DomainError::ExecutionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
