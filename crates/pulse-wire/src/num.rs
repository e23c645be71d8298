//! Numeric widening and loose equality over wire numbers.

use serde_json::Value;

/// Widen any wire number to `f64`. Non-number shapes yield `None`.
pub fn num(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// Loose numeric equality against a wire value.
///
/// Integer and float spellings of the same quantity compare equal
/// (`42` matches `42.0`); non-number shapes never match.
pub fn num_eq(value: &Value, expected: f64) -> bool {
    value.as_f64().is_some_and(|n| n == expected)
}
