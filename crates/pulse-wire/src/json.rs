//! JSON text boundary.
//!
//! Mappings keep their key insertion order on the way out, so an encoder
//! that inserts keys in declaration order produces byte-stable documents.

use serde_json::Value;
use thiserror::Error;

/// Failure while reading JSON text into a wire value.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON document into a wire value.
pub fn from_json_str(text: &str) -> Result<Value, JsonError> {
    Ok(serde_json::from_str(text)?)
}

/// Print a wire value as compact JSON.
pub fn to_json_string(value: &Value) -> String {
    value.to_string()
}

/// Print a wire value as indented JSON.
pub fn to_json_pretty(value: &Value) -> String {
    format!("{value:#}")
}
