//! Compact JSON encoding.
//!
//! Values are first lowered to `serde_json::Value` and then written by a
//! plain recursive walk: no whitespace, object keys in map order, and a
//! more aggressive escaping policy than `serde_json`'s own serializer
//! (forward slashes and several Unicode control/format ranges are escaped
//! so the output can be embedded in HTML and log lines verbatim).

use std::fmt::{self, Write};
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::IoError;

/// Escaping options for the JSON writer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonConfig {
    /// Write `/` as `\/`.
    pub escape_slash: bool,
    /// Write U+007F–U+009F and U+2000–U+20FF as `\uXXXX`.
    pub escape_unicode_ranges: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            escape_slash: true,
            escape_unicode_ranges: true,
        }
    }
}

impl JsonConfig {
    /// Only the escapes JSON itself requires.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            escape_slash: false,
            escape_unicode_ranges: false,
        }
    }
}

/// Writes `value` with the default [`JsonConfig`].
///
/// # Errors
///
/// Propagates failures of `out`.
pub fn write_json<W: Write + ?Sized>(value: &Value, out: &mut W) -> fmt::Result {
    write_json_with(value, &JsonConfig::default(), out)
}

/// Writes `value` using the given escaping options.
///
/// # Errors
///
/// Propagates failures of `out`.
pub fn write_json_with<W: Write + ?Sized>(value: &Value, config: &JsonConfig, out: &mut W) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write!(out, "{n}"),
        Value::String(s) => write_string(s, config, out),
        Value::Array(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_json_with(item, config, out)?;
            }
            out.write_char(']')
        }
        Value::Object(map) => {
            out.write_char('{')?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_string(key, config, out)?;
                out.write_char(':')?;
                write_json_with(item, config, out)?;
            }
            out.write_char('}')
        }
    }
}

fn write_string<W: Write + ?Sized>(s: &str, config: &JsonConfig, out: &mut W) -> fmt::Result {
    out.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\u{8}' => out.write_str("\\b")?,
            '\u{c}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            '/' if config.escape_slash => out.write_str("\\/")?,
            c if needs_unicode_escape(c, config) => write!(out, "\\u{:04X}", u32::from(c))?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

fn needs_unicode_escape(c: char, config: &JsonConfig) -> bool {
    match c {
        '\u{0}'..='\u{1F}' => true,
        '\u{7F}'..='\u{9F}' | '\u{2000}'..='\u{20FF}' => config.escape_unicode_ranges,
        _ => false,
    }
}

/// Renders `value` to a new string with the default [`JsonConfig`].
#[must_use]
pub fn to_json_string(value: &Value) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_json(value, &mut out);
    out
}

/// Encodes any serializable value.
///
/// Non-finite floats become `null`.
///
/// # Errors
///
/// Returns [`IoError::NotSerializable`] if the value has no JSON form,
/// for example a map whose keys are not strings or integers.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, IoError> {
    let value = serde_json::to_value(value).map_err(|e| IoError::NotSerializable(e.to_string()))?;
    Ok(to_json_string(&value))
}

/// Encodes `value` into the file at `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`IoError::NotSerializable`] for unencodable values and
/// [`IoError::Io`] if the directories or file cannot be written.
pub fn write_json_file<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<(), IoError> {
    let path = path.as_ref();
    let text = encode(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &text)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote JSON file");
    Ok(())
}
