//! # linrat-integers
//!
//! Exact integer and rational arithmetic for linrat.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//!
//! Linear expressions never approximate: every coefficient is a
//! `Rational`, and the fallible operations (`checked_div`,
//! `checked_recip`, `try_new`, parsing) report failure instead of
//! panicking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use integer::Integer;
pub use rational::Rational;
