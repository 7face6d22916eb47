#![forbid(unsafe_code)]

use crate::event::{IntervalRecord, LineEvent};
use crate::outage::OutageEvent;
use chrono::{DateTime, Utc};
use tracing::{debug, trace};

/// Whether an outage is in progress within the current segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    OutageOpen {
        start: f64,
    },
}

/// Working state of one test segment.
///
/// Replaced as a whole at every segment boundary, never reset field by field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SegmentState {
    pub test_start: Option<DateTime<Utc>>,
    pub last_interval_end: Option<f64>,
    pub phase: Phase,
}

/// What a tracker accumulated over a whole file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackerOutput {
    /// Sum of the last interval end of every segment.
    pub elapsed_secs: f64,
    pub segments: usize,
    pub outages: Vec<OutageEvent>,
}

/// Outage detection state machine for a single log file.
///
/// Events must be fed in file order. An outage opens on the first interval
/// with zero transfer and closes on the next interval with nonzero transfer,
/// or when the segment ends. The recorded end is the end of the last zero
/// interval, not of the interval that detected recovery.
#[derive(Debug, Default)]
pub struct OutageTracker {
    segment: SegmentState,
    elapsed_secs: f64,
    segments: usize,
    outages: Vec<OutageEvent>,
}

impl OutageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, event: &LineEvent) {
        match event {
            LineEvent::Interval(record) => self.interval(record),
            LineEvent::Timestamp(record) => self.segment.test_start = Some(record.time),
            LineEvent::TestEnd => self.close_segment(),
            LineEvent::Unrecognized => {}
        }
    }

    /// Close a segment left open by an interrupted test and hand out the
    /// results.
    ///
    /// A segment already closed by an end marker has no last interval end,
    /// so nothing is counted twice.
    pub fn finish(mut self) -> TrackerOutput {
        if self.segment.last_interval_end.is_some() {
            self.close_segment();
        }
        TrackerOutput {
            elapsed_secs: self.elapsed_secs,
            segments: self.segments,
            outages: self.outages,
        }
    }

    pub fn phase(&self) -> Phase {
        self.segment.phase
    }

    pub fn segment(&self) -> &SegmentState {
        &self.segment
    }

    /// Number of segments closed so far.
    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn outages(&self) -> &[OutageEvent] {
        &self.outages
    }

    fn interval(&mut self, record: &IntervalRecord) {
        match self.segment.phase {
            Phase::Idle if record.is_zero() => {
                self.segment.phase = Phase::OutageOpen {
                    start: record.start,
                };
            }
            Phase::OutageOpen { .. } if !record.is_zero() => self.close_outage(),
            _ => {}
        }
        self.segment.last_interval_end = Some(record.end);
    }

    fn close_outage(&mut self) {
        // an open outage has always seen its first interval
        if let (Phase::OutageOpen { start }, Some(end)) =
            (self.segment.phase, self.segment.last_interval_end)
        {
            let outage = OutageEvent::new(self.segment.test_start, start, end);
            debug!(
                start,
                end,
                duration = outage.duration_secs(),
                "outage found"
            );
            self.outages.push(outage);
        }
        self.segment.phase = Phase::Idle;
    }

    fn close_segment(&mut self) {
        self.close_outage();
        if let Some(end) = self.segment.last_interval_end {
            self.elapsed_secs += end;
        }
        self.segments += 1;
        trace!(segment = self.segments, elapsed = self.elapsed_secs, "segment closed");
        self.segment = SegmentState::default();
    }
}
