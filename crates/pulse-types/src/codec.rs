//! The per-type codec contract and the JSON text convenience layer.

use serde_json::Value;
use thiserror::Error;

use pulse_wire::{from_json_str, to_json_string, JsonError};

use crate::error::{DecodeError, EncodeError};

/// Decode half of the wire contract.
///
/// `decode` inspects the runtime shape of `value` and builds a typed
/// instance, trying the type's accepted shapes in their documented order.
/// Missing and null attributes decode as unset; required-ness is enforced
/// by [`Encode`], not here.
pub trait Decode: Sized {
    fn decode(value: &Value) -> Result<Self, DecodeError>;
}

/// Encode half of the wire contract.
///
/// `encode` validates that every required attribute is set, then emits the
/// type's single canonical wire shape. Inputs accepted under shorthand
/// decode rules do not survive a round trip verbatim; their canonical
/// rendering does.
pub trait Encode {
    fn encode(&self) -> Result<Value, EncodeError>;
}

/// Aggregate error for callers working across the JSON text boundary.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Json(#[from] JsonError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Parse a JSON document and decode it as `T`.
pub fn from_json<T: Decode>(text: &str) -> Result<T, CodecError> {
    let value = from_json_str(text)?;
    Ok(T::decode(&value)?)
}

/// Encode `value` and print it as compact JSON.
pub fn to_json<T: Encode>(value: &T) -> Result<String, CodecError> {
    let encoded = value.encode()?;
    Ok(to_json_string(&encoded))
}
