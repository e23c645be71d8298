//! Read a JSON document on stdin, decode it as the named feed type, and
//! print the canonical encoding on stdout.
//!
//! Usage: pulse-recode <tag|sample|event|payload|severity>

use std::env;
use std::io::Read;
use std::process::ExitCode;

use pulse_types::{from_json, to_json, CodecError, Decode, Encode};
use pulse_types::{Event, Payload, Sample, Severity, Tag};

const USAGE: &str = "usage: pulse-recode <tag|sample|event|payload|severity>";

fn recode<T: Decode + Encode>(text: &str) -> Result<String, CodecError> {
    to_json(&from_json::<T>(text)?)
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(kind) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let mut text = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut text) {
        eprintln!("pulse-recode: {err}");
        return ExitCode::FAILURE;
    }

    let result = match kind.as_str() {
        "tag" => recode::<Tag>(&text),
        "sample" => recode::<Sample>(&text),
        "event" => recode::<Event>(&text),
        "payload" => recode::<Payload>(&text),
        "severity" => recode::<Severity>(&text),
        other => {
            eprintln!("pulse-recode: unknown type `{other}`");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("pulse-recode: {err}");
            ExitCode::FAILURE
        }
    }
}
