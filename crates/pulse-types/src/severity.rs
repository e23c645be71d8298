//! `Severity`: the closed constant set carried by some feed events.

use serde_json::Value;

use crate::codec::{Decode, Encode};
use crate::error::{DecodeError, EncodeError};

/// Severity level of a feed event.
///
/// The wire form is always one of the declared strings; anything else is
/// rejected at decode time, so an instance can never hold an undeclared
/// level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Every declared constant, in declaration order.
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warn, Severity::Error];

    /// The wire string for this constant.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl Decode for Severity {
    fn decode(value: &Value) -> Result<Severity, DecodeError> {
        let Some(constant) = value.as_str() else {
            return Err(DecodeError::mismatch("string", value));
        };
        for level in Severity::ALL {
            if level.as_str() == constant {
                return Ok(level);
            }
        }
        Err(DecodeError::UnknownVariant(constant.to_owned()))
    }
}

impl Encode for Severity {
    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(self.as_str().to_owned()))
    }
}
