//! Decode and encode failure taxonomy.

use pulse_wire::Shape;
use serde_json::Value;
use thiserror::Error;

/// Failure while decoding a wire value into a typed instance.
///
/// Decode failures are terminal: they surface at the point of detection
/// and no partially decoded instance is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The input's runtime shape matches none of the accepted rules for
    /// the target type, or a declared attribute carries the wrong shape.
    #[error("expected {expected}, found {found}")]
    ShapeMismatch {
        expected: &'static str,
        found: Shape,
    },
    /// A union mapping arrived without its discriminator key.
    #[error("missing discriminator key `{0}`")]
    MissingDiscriminator(&'static str),
    /// A discriminator or constant-set string outside the declared set.
    #[error("unknown variant `{0}`")]
    UnknownVariant(String),
}

impl DecodeError {
    /// Reject `value`, naming the rule it failed and the shape it had.
    pub(crate) fn mismatch(expected: &'static str, value: &Value) -> DecodeError {
        DecodeError::ShapeMismatch {
            expected,
            found: Shape::of(value),
        }
    }
}

/// Failure while encoding a typed instance into a wire value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A required attribute was unset. Raised before any output is
    /// produced, so a failing encode emits nothing.
    #[error("`{0}` is a required field")]
    MissingRequiredField(&'static str),
}
