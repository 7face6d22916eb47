#![forbid(unsafe_code)]

use crate::Error;
use crate::event::{IntervalRecord, LineEvent, TimestampRecord};
use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Turns a raw log line into a [`LineEvent`].
pub trait LineClassifier: Send + Sync {
    fn classify(&self, line: &str) -> Result<LineEvent, Error>;
}

// Matches both iperf3 layouts:
// [  7]   0.00-1.00   sec   592 KBytes  4.85 Mbits/sec
// [  4]   0.00-1.00   sec   614 KBytes  5.03 Mbits/sec    0   73.5 KBytes
static INTERVAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[.+\] +([0-9.]+)-([0-9.]+).*sec +([0-9.]+) +([KMGT]?)Bytes.*bits/sec")
        .expect("interval pattern is valid")
});

// Time: Mon, 19 Dec 2022 18:59:15 GMT
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Time: ..., ([0-9]{1,2} ... [0-9]{4} [0-9]{2}:[0-9]{2}:[0-9]{2} GMT)$")
        .expect("timestamp pattern is valid")
});

// the weekday is not checked against the date
const TIMESTAMP_FORMAT: &str = "%d %b %Y %H:%M:%S GMT";
const TEST_END_PREFIX: &str = "- - -";

/// Classifier for the text report of iperf3 (both the 4 and 6 column
/// interval layouts), with `Time:` lines as test start markers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Iperf3Classifier;

impl Iperf3Classifier {
    fn interval(line: &str) -> Option<Result<LineEvent, Error>> {
        let caps = INTERVAL.captures(line)?;
        // per-stream totals printed after the test
        if line.ends_with("sender") || line.ends_with("receiver") {
            return Some(Ok(LineEvent::Unrecognized));
        }
        Some(Self::interval_record(&caps).map(LineEvent::Interval))
    }

    fn interval_record(caps: &Captures<'_>) -> Result<IntervalRecord, Error> {
        let start = parse_number(&caps[1])?;
        let end = parse_number(&caps[2])?;
        let amount = parse_number(&caps[3])?;
        Ok(IntervalRecord::new(
            start,
            end,
            amount * unit_multiplier(&caps[4]),
        ))
    }

    fn timestamp(line: &str) -> Option<Result<LineEvent, Error>> {
        let caps = TIMESTAMP.captures(line)?;
        let value = &caps[1];
        let parsed = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
            .map(|naive| {
                LineEvent::Timestamp(TimestampRecord {
                    time: naive.and_utc(),
                })
            })
            .map_err(|source| Error::MalformedTimestamp {
                line: 0,
                value: value.to_owned(),
                source,
            });
        Some(parsed)
    }
}

impl LineClassifier for Iperf3Classifier {
    fn classify(&self, line: &str) -> Result<LineEvent, Error> {
        let line = line.trim();
        // interval lines dominate, try them first
        if let Some(event) = Self::interval(line) {
            return event;
        }
        if let Some(event) = Self::timestamp(line) {
            return event;
        }
        if line.starts_with(TEST_END_PREFIX) {
            return Ok(LineEvent::TestEnd);
        }
        Ok(LineEvent::Unrecognized)
    }
}

fn parse_number(value: &str) -> Result<f64, Error> {
    value.parse().map_err(|source| Error::MalformedNumber {
        line: 0,
        value: value.to_owned(),
        source,
    })
}

/// iperf3 reports transfer with binary prefixes.
fn unit_multiplier(prefix: &str) -> f64 {
    match prefix {
        "K" => 1024.0,
        "M" => 1024.0 * 1024.0,
        "G" => 1024.0 * 1024.0 * 1024.0,
        "T" => 1024.0 * 1024.0 * 1024.0 * 1024.0,
        _ => 1.0,
    }
}
