use pulse_types::random::{random_event, random_payload, random_sample, random_severity, random_tag};
use pulse_types::{Decode, Encode};

const ROUNDS: usize = 200;

fn assert_round_trip<T>(instance: T)
where
    T: Decode + Encode + PartialEq + std::fmt::Debug,
{
    let encoded = instance.encode().unwrap();
    let decoded = T::decode(&encoded).unwrap();
    assert_eq!(decoded, instance);

    // Canonical output is a fixed point: re-encoding changes nothing.
    let re_encoded = decoded.encode().unwrap();
    assert_eq!(re_encoded, encoded);
}

#[test]
fn random_tags_round_trip() {
    for _ in 0..ROUNDS {
        assert_round_trip(random_tag());
    }
}

#[test]
fn random_samples_round_trip() {
    for _ in 0..ROUNDS {
        assert_round_trip(random_sample());
    }
}

#[test]
fn random_events_round_trip() {
    for _ in 0..ROUNDS {
        assert_round_trip(random_event());
    }
}

#[test]
fn random_payloads_round_trip() {
    for _ in 0..ROUNDS {
        assert_round_trip(random_payload());
    }
}

#[test]
fn random_severities_round_trip() {
    for _ in 0..ROUNDS {
        assert_round_trip(random_severity());
    }
}

#[test]
fn random_instances_survive_the_text_boundary() {
    for _ in 0..ROUNDS {
        let event = random_event();
        let text = pulse_types::to_json(&event).unwrap();
        let reparsed: pulse_types::Event = pulse_types::from_json(&text).unwrap();
        assert_eq!(reparsed, event);
    }
}
