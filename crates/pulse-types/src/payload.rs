//! `Payload`: a one-field wrapper around an opaque body.

use serde_json::{Map, Value};

use crate::codec::{Decode, Encode};
use crate::error::{DecodeError, EncodeError};
use crate::field::{require, str_member};

/// An opaque body.
///
/// Decode accepts the bare string shorthand or the explicit one-field
/// mapping; encode always emits the mapping form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    pub data: Option<String>,
}

impl Payload {
    pub fn new(data: impl Into<String>) -> Payload {
        Payload {
            data: Some(data.into()),
        }
    }
}

impl Decode for Payload {
    fn decode(value: &Value) -> Result<Payload, DecodeError> {
        match value {
            // Shorthand: a bare string is the body itself.
            Value::String(data) => Ok(Payload::new(data.clone())),
            Value::Object(map) => Ok(Payload {
                data: str_member(map, "data")?,
            }),
            other => Err(DecodeError::mismatch("string or mapping", other)),
        }
    }
}

impl Encode for Payload {
    fn encode(&self) -> Result<Value, EncodeError> {
        let data = require(&self.data, "data")?;
        let mut out = Map::new();
        out.insert("data".to_owned(), Value::String(data.clone()));
        Ok(Value::Object(out))
    }
}
