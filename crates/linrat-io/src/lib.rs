//! # linrat-io
//!
//! Output plumbing that sits next to the expression types:
//! - [`json`]: compact JSON encoding of dynamic values
//! - [`tee`]: a byte sink that forwards to two writers
//! - [`appender`]: lazily rendered text with optional truncation
//!
//! None of these touch expression semantics; they only move text around.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod appender;
pub mod error;
pub mod json;
pub mod tee;

#[cfg(test)]
mod proptests;

pub use appender::{to_string, to_string_with_truncation, Appender, DisplayAppender};
pub use error::IoError;
pub use json::{encode, to_json_string, write_json, write_json_file, write_json_with, JsonConfig};
pub use tee::TeeWriter;
