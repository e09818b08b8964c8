//! # linrat
//!
//! Exact sparse linear expressions over arbitrary precision rationals.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: `dashu`-backed integers and rationals, always reduced
//! - **Canonical Expressions**: no zero coefficient is ever stored
//! - **Proportionality**: `divide` finds the scalar relating two expressions
//! - **Output Helpers**: compact JSON, tee writers, truncating appenders
//!
//! ## Quick Start
//!
//! ```rust
//! use linrat::prelude::*;
//!
//! let e = LinearExpression::pair("x", Rational::from(2))
//!     .add(&LinearExpression::pair("y", Rational::from(3)));
//!
//! assert_eq!(e.to_string(), "2x + 3y");
//! assert_eq!(e.get_coeff(&"z"), Rational::from(0));
//! assert_eq!(linrat::io::to_string_with_truncation(&e, 2), "2x");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use linrat_integers as integers;
pub use linrat_io as io;
pub use linrat_linear as linear;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use linrat_integers::{Integer, Rational};
    pub use linrat_io::Appender;
    pub use linrat_linear::{LinearError, LinearExpression};
}
