//! Deferred text rendering.
//!
//! An [`Appender`] knows how to write itself into any `fmt::Write`
//! sink. Rendering to a string can be capped with
//! [`to_string_with_truncation`], which stops the producer as soon as
//! the cap is exceeded instead of building the full text first.

use std::fmt::{self, Display, Write};

use linrat_linear::LinearExpression;
use serde_json::Value;
use tracing::debug;

use crate::json::write_json;

/// A value that can append its textual form to a sink.
pub trait Appender {
    /// Writes the textual form to `out`.
    ///
    /// # Errors
    ///
    /// Propagates failures of `out`.
    fn append_to(&self, out: &mut dyn Write) -> fmt::Result;
}

/// Adapts any `Display` value into an [`Appender`].
#[derive(Clone, Copy, Debug)]
pub struct DisplayAppender<T>(pub T);

impl<T: Display> Appender for DisplayAppender<T> {
    fn append_to(&self, out: &mut dyn Write) -> fmt::Result {
        write!(out, "{}", self.0)
    }
}

impl<V: Display> Appender for LinearExpression<V> {
    fn append_to(&self, out: &mut dyn Write) -> fmt::Result {
        write!(out, "{self}")
    }
}

impl Appender for Value {
    fn append_to(&self, out: &mut dyn Write) -> fmt::Result {
        write_json(self, out)
    }
}

/// Renders `appender` completely.
pub fn to_string<A: Appender + ?Sized>(appender: &A) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = appender.append_to(&mut out);
    out
}

/// A string sink that refuses input past `limit` characters.
struct Truncating {
    buf: String,
    chars: usize,
    limit: usize,
    truncated: bool,
}

impl Write for Truncating {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = self.limit - self.chars;
        let len = s.chars().count();
        if len <= remaining {
            self.buf.push_str(s);
            self.chars += len;
            return Ok(());
        }
        let cut = s.char_indices().nth(remaining).map_or(s.len(), |(i, _)| i);
        self.buf.push_str(&s[..cut]);
        self.chars = self.limit;
        self.truncated = true;
        // stops the producer
        Err(fmt::Error)
    }
}

/// Renders at most `limit` characters of `appender`.
///
/// Output no longer than `limit` is returned whole.
pub fn to_string_with_truncation<A: Appender + ?Sized>(appender: &A, limit: usize) -> String {
    let mut sink = Truncating {
        buf: String::new(),
        chars: 0,
        limit,
        truncated: false,
    };
    let _ = appender.append_to(&mut sink);
    if sink.truncated {
        debug!(limit, "appender output truncated");
    }
    sink.buf
}
