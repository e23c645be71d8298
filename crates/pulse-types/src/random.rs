//! Random well-formed instances for property-style tests and demos.
//!
//! Every generator returns an instance whose required attributes are set,
//! so it encodes without error and survives a round trip.

use rand::Rng;

use crate::event::{Event, EventOne, EventTwo};
use crate::payload::Payload;
use crate::sample::Sample;
use crate::severity::Severity;
use crate::tag::Tag;

fn word() -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(3..=10);
    (0..len).map(|_| rng.gen_range('a'..='z')).collect()
}

fn reading() -> f64 {
    // Quarter steps keep the values exactly representable.
    let mut rng = rand::thread_rng();
    rng.gen_range(-4_000..=4_000) as f64 / 4.0
}

pub fn random_tag() -> Tag {
    let tag = Tag::new(word());
    if rand::thread_rng().gen_bool(0.5) {
        tag.with_unit(word())
    } else {
        tag
    }
}

pub fn random_sample() -> Sample {
    Sample::new(rand::thread_rng().gen_range(0..=1_000_000) as f64, reading())
}

pub fn random_severity() -> Severity {
    let index = rand::thread_rng().gen_range(0..Severity::ALL.len());
    Severity::ALL[index]
}

pub fn random_event() -> Event {
    let mut rng = rand::thread_rng();
    if rng.gen_bool(0.5) {
        Event::One(EventOne::new(word(), random_tag()))
    } else {
        let two = EventTwo::new(word(), random_tag());
        if rng.gen_bool(0.5) {
            Event::Two(two.with_severity(random_severity()))
        } else {
            Event::Two(two)
        }
    }
}

pub fn random_payload() -> Payload {
    Payload::new(word())
}
