#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};

/// One measured interval of a test, offsets relative to the test start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalRecord {
    pub start: f64,
    pub end: f64,
    /// Transfer during the interval, normalized to bytes.
    pub transfer_bytes: f64,
}

impl IntervalRecord {
    pub fn new(start: f64, end: f64, transfer_bytes: f64) -> Self {
        Self {
            start,
            end,
            transfer_bytes,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.transfer_bytes == 0.0
    }
}

/// Wall-clock start of a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampRecord {
    pub time: DateTime<Utc>,
}

/// A classified log line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEvent {
    Interval(IntervalRecord),
    Timestamp(TimestampRecord),
    TestEnd,
    Unrecognized,
}
