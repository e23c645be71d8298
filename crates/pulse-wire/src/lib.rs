//! pulse-wire - wire value model and JSON boundary for the pulse feed format.
//!
//! The wire representation is [`serde_json::Value`]: a closed set of six
//! runtime shapes (null, bool, number, string, sequence, mapping) as produced
//! by any self-describing transport. This crate classifies shapes, widens
//! wire numbers, and moves values across the JSON text boundary. The typed
//! decode/encode contract on top of it lives in `pulse-types`.

mod json;
mod num;
mod shape;

pub use json::{from_json_str, to_json_pretty, to_json_string, JsonError};
pub use num::{num, num_eq};
pub use shape::Shape;
