//! Errors for the output helpers.

use thiserror::Error;

/// Errors raised while encoding or writing output.
#[derive(Debug, Error)]
pub enum IoError {
    /// The underlying sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The value has no JSON representation.
    #[error("value cannot be written as JSON: {0}")]
    NotSerializable(String),
}
