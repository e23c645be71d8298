//! `Event`: the discriminated family of feed events.

use serde_json::{Map, Value};

use crate::codec::{Decode, Encode};
use crate::error::{DecodeError, EncodeError};
use crate::field::{decode_member, member, require, str_member};
use crate::severity::Severity;
use crate::tag::Tag;

/// Mapping key carrying the active variant's discriminator.
pub const DISCRIMINATOR_KEY: &str = "type";

/// Tag name attached to events built from the bare-string shorthand.
const SHORTHAND_TAG_NAME: &str = "data";

/// The `one` variant: a named event with a label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventOne {
    pub name: Option<String>,
    pub data: Option<Tag>,
}

impl EventOne {
    pub const DISCRIMINATOR: &'static str = "one";

    pub fn new(name: impl Into<String>, data: Tag) -> EventOne {
        EventOne {
            name: Some(name.into()),
            data: Some(data),
        }
    }

    fn decode_fields(map: &Map<String, Value>) -> Result<EventOne, DecodeError> {
        Ok(EventOne {
            name: str_member(map, "name")?,
            data: decode_member(map, "data")?,
        })
    }

    fn encode_fields(&self) -> Result<Map<String, Value>, EncodeError> {
        let name = require(&self.name, "name")?;
        let data = require(&self.data, "data")?;
        let mut fields = Map::new();
        fields.insert("name".to_owned(), Value::String(name.clone()));
        fields.insert("data".to_owned(), data.encode()?);
        Ok(fields)
    }
}

/// The `two` variant: like `one`, plus an optional severity level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTwo {
    pub name: Option<String>,
    pub data: Option<Tag>,
    pub severity: Option<Severity>,
}

impl EventTwo {
    pub const DISCRIMINATOR: &'static str = "two";

    pub fn new(name: impl Into<String>, data: Tag) -> EventTwo {
        EventTwo {
            name: Some(name.into()),
            data: Some(data),
            severity: None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> EventTwo {
        self.severity = Some(severity);
        self
    }

    fn decode_fields(map: &Map<String, Value>) -> Result<EventTwo, DecodeError> {
        Ok(EventTwo {
            name: str_member(map, "name")?,
            data: decode_member(map, "data")?,
            severity: decode_member(map, "severity")?,
        })
    }

    fn encode_fields(&self) -> Result<Map<String, Value>, EncodeError> {
        let name = require(&self.name, "name")?;
        let data = require(&self.data, "data")?;
        let mut fields = Map::new();
        fields.insert("name".to_owned(), Value::String(name.clone()));
        fields.insert("data".to_owned(), data.encode()?);
        if let Some(severity) = self.severity {
            fields.insert("severity".to_owned(), severity.encode()?);
        }
        Ok(fields)
    }
}

/// A feed event: exactly one of the declared variants.
///
/// Variant dispatch is an exhaustive match everywhere, so adding a
/// variant without extending every dispatch site fails to compile.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    One(EventOne),
    Two(EventTwo),
}

impl Event {
    /// The active variant's discriminator constant.
    pub fn discriminator(&self) -> &'static str {
        match self {
            Event::One(_) => EventOne::DISCRIMINATOR,
            Event::Two(_) => EventTwo::DISCRIMINATOR,
        }
    }

    /// The instance built from the bare-string shorthand.
    fn shorthand(name: &str) -> Event {
        Event::One(EventOne::new(name, Tag::new(SHORTHAND_TAG_NAME)))
    }
}

impl Decode for Event {
    fn decode(value: &Value) -> Result<Event, DecodeError> {
        match value {
            // Shorthand: a bare string names an instance of the default
            // variant.
            Value::String(name) => Ok(Event::shorthand(name)),
            Value::Object(map) => {
                // A null discriminator is treated like an absent one.
                let Some(label) = member(map, DISCRIMINATOR_KEY) else {
                    return Err(DecodeError::MissingDiscriminator(DISCRIMINATOR_KEY));
                };
                let Some(label) = label.as_str() else {
                    return Err(DecodeError::mismatch("string discriminator", label));
                };
                match label {
                    EventOne::DISCRIMINATOR => Ok(Event::One(EventOne::decode_fields(map)?)),
                    EventTwo::DISCRIMINATOR => Ok(Event::Two(EventTwo::decode_fields(map)?)),
                    unknown => Err(DecodeError::UnknownVariant(unknown.to_owned())),
                }
            }
            other => Err(DecodeError::mismatch("string or mapping", other)),
        }
    }
}

impl Encode for Event {
    fn encode(&self) -> Result<Value, EncodeError> {
        let fields = match self {
            Event::One(one) => one.encode_fields()?,
            Event::Two(two) => two.encode_fields()?,
        };
        // Discriminator first, then the variant's attributes in
        // declaration order.
        let mut data = Map::new();
        data.insert(
            DISCRIMINATOR_KEY.to_owned(),
            Value::String(self.discriminator().to_owned()),
        );
        data.extend(fields);
        Ok(Value::Object(data))
    }
}
