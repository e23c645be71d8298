//! Runtime shape classification for wire values.

use std::fmt;

use serde_json::Value;

/// The structural category of a wire value.
///
/// Shape drives decode dispatch and names what a rejected input actually
/// was. Numbers are a single shape: integer and float spellings of the
/// same quantity are not distinguished anywhere in the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Mapping,
}

impl Shape {
    /// Classify a wire value.
    pub fn of(value: &Value) -> Shape {
        match value {
            Value::Null => Shape::Null,
            Value::Bool(_) => Shape::Bool,
            Value::Number(_) => Shape::Number,
            Value::String(_) => Shape::String,
            Value::Array(_) => Shape::Sequence,
            Value::Object(_) => Shape::Mapping,
        }
    }

    /// Stable lowercase name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Null => "null",
            Shape::Bool => "bool",
            Shape::Number => "number",
            Shape::String => "string",
            Shape::Sequence => "sequence",
            Shape::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classifies_all_six_shapes() {
        assert_eq!(Shape::of(&json!(null)), Shape::Null);
        assert_eq!(Shape::of(&json!(true)), Shape::Bool);
        assert_eq!(Shape::of(&json!(42)), Shape::Number);
        assert_eq!(Shape::of(&json!(41.2)), Shape::Number);
        assert_eq!(Shape::of(&json!("data")), Shape::String);
        assert_eq!(Shape::of(&json!([1, 2])), Shape::Sequence);
        assert_eq!(Shape::of(&json!({"name": "a"})), Shape::Mapping);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Shape::Sequence.to_string(), "sequence");
        assert_eq!(Shape::Mapping.as_str(), "mapping");
    }
}
