//! # linrat-linear
//!
//! Sparse homogeneous linear expressions `Σ aᵢ·xᵢ` over exact rationals.
//!
//! A [`LinearExpression`] maps variables of any `Eq + Hash` type to
//! non-zero [`Rational`] coefficients. Values are immutable: every
//! operation returns a fresh expression, and no stored coefficient is
//! ever zero.
//!
//! ```
//! use linrat_integers::Rational;
//! use linrat_linear::LinearExpression;
//!
//! let e = LinearExpression::pair("x", Rational::from(2))
//!     .add(&LinearExpression::pair("y", Rational::from(4)));
//! let f = LinearExpression::of_variable("x")
//!     .add(&LinearExpression::pair("y", Rational::from(2)));
//!
//! assert_eq!(e.to_string(), "2x + 4y");
//! assert_eq!(e.divide(&f), Some(Rational::from(2)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod expression;
pub mod format;
mod ops;

#[cfg(test)]
mod proptests;

pub use error::LinearError;
pub use expression::LinearExpression;
pub use format::write_monomial;
pub use linrat_integers::Rational;
