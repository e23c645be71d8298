//! pulse-types - typed decode/encode bindings for pulse feed wire values.
//!
//! Every feed type implements [`Decode`] and [`Encode`] over
//! [`serde_json::Value`]. Decode accepts each documented input shape for
//! the type (shorthand strings, bare numbers, positional sequences,
//! mappings) and treats missing or null attributes as unset; encode
//! validates required attributes and always emits the type's single
//! canonical shape. Instances are plain data and both operations take
//! shared references, so values move freely across threads.

pub mod codec;
pub mod error;
pub mod random;

mod event;
mod field;
mod payload;
mod sample;
mod severity;
mod tag;

pub use pulse_wire::Shape;

pub use codec::{from_json, to_json, CodecError, Decode, Encode};
pub use error::{DecodeError, EncodeError};
pub use event::{Event, EventOne, EventTwo, DISCRIMINATOR_KEY};
pub use payload::Payload;
pub use sample::{Sample, DEFAULT_VALUE, SENTINEL_TIMESTAMP, SENTINEL_VALUE};
pub use severity::Severity;
pub use tag::Tag;
