//! `Sample`: a timestamped reading with a flexible wire form.

use serde_json::{Map, Value};

use pulse_wire::{num, num_eq};

use crate::codec::{Decode, Encode};
use crate::error::{DecodeError, EncodeError};
use crate::field::{num_member, require};

/// Wire literal recognized by the sentinel rule.
pub const SENTINEL_TIMESTAMP: f64 = 42.0;
/// Reading carried by the canonical sentinel instance.
pub const SENTINEL_VALUE: f64 = 41.2;
/// Reading substituted when only a bare timestamp arrives.
pub const DEFAULT_VALUE: f64 = 42.0;

/// A single timestamped reading.
///
/// Decode accepts four shapes, tried in order: the sentinel number
/// literal, any other bare number, a mapping with `timestamp`/`value`
/// attributes, and a positional sequence. Whatever shape came in, encode
/// emits the one canonical form `[timestamp, value]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    pub timestamp: Option<f64>,
    pub value: Option<f64>,
}

impl Sample {
    pub fn new(timestamp: f64, value: f64) -> Sample {
        Sample {
            timestamp: Some(timestamp),
            value: Some(value),
        }
    }

    /// The canonical instance produced by the sentinel literal.
    pub fn sentinel() -> Sample {
        Sample::new(SENTINEL_TIMESTAMP, SENTINEL_VALUE)
    }

    /// Record-shaped decode of the mapping form. Deliberately one level
    /// deep: attribute values are plain numbers, never nested flexible
    /// shapes.
    fn decode_mapping(map: &Map<String, Value>) -> Result<Sample, DecodeError> {
        Ok(Sample {
            timestamp: num_member(map, "timestamp")?,
            value: num_member(map, "value")?,
        })
    }

    /// Positional decode of the sequence form. Elements past the second
    /// are ignored.
    fn decode_sequence(value: &Value, items: &[Value]) -> Result<Sample, DecodeError> {
        if items.len() < 2 {
            return Err(DecodeError::mismatch(
                "sequence of at least 2 numbers",
                value,
            ));
        }
        let timestamp =
            num(&items[0]).ok_or_else(|| DecodeError::mismatch("number", &items[0]))?;
        let reading = num(&items[1]).ok_or_else(|| DecodeError::mismatch("number", &items[1]))?;
        Ok(Sample::new(timestamp, reading))
    }
}

impl Decode for Sample {
    fn decode(value: &Value) -> Result<Sample, DecodeError> {
        // Rule order is part of the wire contract: the sentinel literal
        // wins over the generic bare-number rule, which wins over the
        // structured forms.
        match value {
            v if num_eq(v, SENTINEL_TIMESTAMP) => Ok(Sample::sentinel()),
            Value::Number(n) => match n.as_f64() {
                Some(timestamp) => Ok(Sample::new(timestamp, DEFAULT_VALUE)),
                None => Err(DecodeError::mismatch("number", value)),
            },
            Value::Object(map) => Sample::decode_mapping(map),
            Value::Array(items) => Sample::decode_sequence(value, items),
            other => Err(DecodeError::mismatch("number, mapping, or sequence", other)),
        }
    }
}

impl Encode for Sample {
    fn encode(&self) -> Result<Value, EncodeError> {
        let timestamp = *require(&self.timestamp, "timestamp")?;
        let reading = *require(&self.value, "value")?;
        Ok(Value::Array(vec![timestamp.into(), reading.into()]))
    }
}
