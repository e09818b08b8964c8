//! Errors raised while constructing or parsing numbers.

use thiserror::Error;

/// Failure to build a [`Rational`](crate::Rational).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A fraction was requested with a zero denominator.
    #[error("denominator cannot be zero")]
    ZeroDenominator,

    /// The input text is not of the form `n` or `n/d`.
    #[error("invalid rational literal `{input}`")]
    Parse {
        /// The rejected input.
        input: String,
    },
}
