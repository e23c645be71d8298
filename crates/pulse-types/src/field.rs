//! Attribute access shared by the record-shaped decode and encode paths.
//!
//! Decode is permissive: a missing key and an explicit null both leave the
//! attribute unset. A key that is present with a non-null value of the
//! wrong shape is a mismatch, not an unset attribute.

use serde_json::{Map, Value};

use crate::codec::Decode;
use crate::error::{DecodeError, EncodeError};

/// Look up an attribute, treating absence and null alike.
pub(crate) fn member<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    match map.get(key) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

/// Require the record mapping shape before reading attributes.
pub(crate) fn mapping(value: &Value) -> Result<&Map<String, Value>, DecodeError> {
    value
        .as_object()
        .ok_or_else(|| DecodeError::mismatch("mapping", value))
}

/// Read a string attribute. Unset stays unset.
pub(crate) fn str_member(
    map: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, DecodeError> {
    match member(map, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(DecodeError::mismatch("string", other)),
    }
}

/// Read a numeric attribute, widening any wire number to `f64`.
pub(crate) fn num_member(
    map: &Map<String, Value>,
    key: &str,
) -> Result<Option<f64>, DecodeError> {
    match member(map, key) {
        None => Ok(None),
        Some(value) => match pulse_wire::num(value) {
            Some(n) => Ok(Some(n)),
            None => Err(DecodeError::mismatch("number", value)),
        },
    }
}

/// Read a nested typed attribute by delegating to its own decode.
pub(crate) fn decode_member<T: Decode>(
    map: &Map<String, Value>,
    key: &str,
) -> Result<Option<T>, DecodeError> {
    member(map, key).map(T::decode).transpose()
}

/// Encode-time required check. Runs before any output is assembled, so
/// the first unset required attribute in declaration order wins.
pub(crate) fn require<'a, T>(
    slot: &'a Option<T>,
    name: &'static str,
) -> Result<&'a T, EncodeError> {
    slot.as_ref().ok_or(EncodeError::MissingRequiredField(name))
}
