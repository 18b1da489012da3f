use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Store faults are not retried and are not distinguished further at the
/// request boundary; every variant surfaces as a generic server error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("{operation} failed: {message}")]
    OperationFailed {
        operation: &'static str,
        message: String,
    },
    #[error("Invalid item data: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
