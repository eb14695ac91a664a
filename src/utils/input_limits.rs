//! Size and depth limits applied to landofile input.

use serde_json::Value;

use crate::error::{LandoError, Result};

/// Maximum allowed nesting depth of a parsed landofile.
pub const MAX_DOCUMENT_DEPTH: usize = 100;

/// Maximum allowed landofile size (10MB).
pub const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;

/// Reject raw input larger than [`MAX_DOCUMENT_SIZE`].
///
/// Runs before parsing, so an oversized file is never handed to a parser.
pub fn check_size(content: &str) -> Result<()> {
    if content.len() > MAX_DOCUMENT_SIZE {
        return Err(LandoError::InputLimit {
            limit: "size",
            actual: content.len(),
            maximum: MAX_DOCUMENT_SIZE,
        });
    }
    Ok(())
}

/// Reject parsed documents nested deeper than [`MAX_DOCUMENT_DEPTH`].
pub fn check_depth(value: &Value) -> Result<()> {
    let depth = document_depth(value);
    if depth > MAX_DOCUMENT_DEPTH {
        return Err(LandoError::InputLimit {
            limit: "nesting depth",
            actual: depth,
            maximum: MAX_DOCUMENT_DEPTH,
        });
    }
    Ok(())
}

/// Calculate the maximum nesting depth of a document.
pub fn document_depth(value: &Value) -> usize {
    match value {
        Value::Object(map) => 1 + map.values().map(document_depth).max().unwrap_or(0),
        Value::Array(arr) => 1 + arr.iter().map(document_depth).max().unwrap_or(0),
        _ => 1,
    }
}
