//! `Tag`: the named label record attached to feed entries.

use serde_json::{Map, Value};

use crate::codec::{Decode, Encode};
use crate::error::{DecodeError, EncodeError};
use crate::field::{mapping, require, str_member};

/// A named label.
///
/// Wire form is a mapping with a required `name` and an optional `unit`.
/// Decode accepts any mapping and leaves missing attributes unset; the
/// required check runs on encode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    pub name: Option<String>,
    pub unit: Option<String>,
}

impl Tag {
    /// Construct a tag with its required attribute set.
    pub fn new(name: impl Into<String>) -> Tag {
        Tag {
            name: Some(name.into()),
            unit: None,
        }
    }

    /// Attach the optional unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Tag {
        self.unit = Some(unit.into());
        self
    }
}

impl Decode for Tag {
    fn decode(value: &Value) -> Result<Tag, DecodeError> {
        let map = mapping(value)?;
        Ok(Tag {
            name: str_member(map, "name")?,
            unit: str_member(map, "unit")?,
        })
    }
}

impl Encode for Tag {
    fn encode(&self) -> Result<Value, EncodeError> {
        let name = require(&self.name, "name")?;
        let mut data = Map::new();
        data.insert("name".to_owned(), Value::String(name.clone()));
        if let Some(unit) = &self.unit {
            data.insert("unit".to_owned(), Value::String(unit.clone()));
        }
        Ok(Value::Object(data))
    }
}
