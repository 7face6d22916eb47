#![forbid(unsafe_code)]

use chrono::{DateTime, TimeDelta, Utc};

/// A detected zero-throughput period, offsets relative to the test start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutageEvent {
    /// Wall-clock start of the test the outage belongs to, if it was logged.
    pub test_start: Option<DateTime<Utc>>,
    pub start_offset: f64,
    /// End of the last interval that still reported zero transfer.
    pub end_offset: f64,
}

impl OutageEvent {
    pub fn new(test_start: Option<DateTime<Utc>>, start_offset: f64, end_offset: f64) -> Self {
        Self {
            test_start,
            start_offset,
            end_offset,
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.end_offset - self.start_offset
    }

    /// Wall-clock time the outage began.
    pub fn absolute_start(&self) -> Option<DateTime<Utc>> {
        let offset = TimeDelta::microseconds((self.start_offset * 1e6).round() as i64);
        self.test_start?.checked_add_signed(offset)
    }
}
