//! Errors for linear expression construction.

use thiserror::Error;

/// Errors raised by [`LinearExpression`](crate::LinearExpression) constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinearError {
    /// A required argument was missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
