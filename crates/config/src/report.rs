#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Report {
    /// Print one line per outage below the file summary.
    pub verbose: bool,

    /// Decimal places of the lost-time percentage (clamped to 0..=12).
    pub percent_precision: usize,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            verbose: false,
            percent_precision: 5,
        }
    }
}

impl Report {
    pub fn clamp(self) -> Self {
        Self {
            percent_precision: self.percent_precision.min(12),
            ..self
        }
    }
}
