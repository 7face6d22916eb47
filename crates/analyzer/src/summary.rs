#![forbid(unsafe_code)]

use crate::outage::OutageEvent;
use crate::tracker::TrackerOutput;

/// Share of the test time lost to outages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Percentage {
    NoOutages,
    /// Outages were recorded but the test reported no elapsed time.
    Undefined,
    Value(f64),
}

/// Aggregated outage statistics for one log file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    elapsed_secs: f64,
    outages: Vec<OutageEvent>,
    longest: Option<usize>,
    total_outage_secs: f64,
}

impl FileSummary {
    pub fn new(elapsed_secs: f64, outages: Vec<OutageEvent>) -> Self {
        // first occurrence wins on ties
        let longest = outages
            .iter()
            .enumerate()
            .fold(None::<(usize, f64)>, |best, (idx, outage)| {
                let duration = outage.duration_secs();
                match best {
                    Some((_, max)) if max >= duration => best,
                    _ => Some((idx, duration)),
                }
            })
            .map(|(idx, _)| idx);
        let total_outage_secs = outages.iter().map(OutageEvent::duration_secs).sum();

        Self {
            elapsed_secs,
            outages,
            longest,
            total_outage_secs,
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Outages in detection order.
    pub fn outages(&self) -> &[OutageEvent] {
        &self.outages
    }

    pub fn longest(&self) -> Option<&OutageEvent> {
        self.longest.map(|idx| &self.outages[idx])
    }

    pub fn total_outage_secs(&self) -> f64 {
        self.total_outage_secs
    }

    pub fn percentage(&self) -> Percentage {
        if self.outages.is_empty() {
            Percentage::NoOutages
        } else if self.elapsed_secs == 0.0 {
            Percentage::Undefined
        } else {
            Percentage::Value(self.total_outage_secs / self.elapsed_secs * 100.0)
        }
    }

    /// Whether `outage` lasted as long as the longest one. Every tie matches.
    pub fn is_longest(&self, outage: &OutageEvent) -> bool {
        self.longest()
            .is_some_and(|longest| longest.duration_secs() == outage.duration_secs())
    }
}

impl From<TrackerOutput> for FileSummary {
    fn from(output: TrackerOutput) -> Self {
        Self::new(output.elapsed_secs, output.outages)
    }
}
