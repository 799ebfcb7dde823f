//! Error handling for aeg-store
//!
//! Wraps aeg-core ExError with store-specific helpers

use aeg_core::errors::{AegError, ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a JSON encoding/decoding error
pub fn serialization_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an error for a well-formed JSON document that is not a graph
pub fn format_error(operation: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(operation.to_string())
        .with_message(reason)
}

/// Convert a core error raised while rebuilding a graph
pub fn from_core(operation: &str, err: AegError) -> ExError {
    ExError::from(err).with_op(operation.to_string())
}
