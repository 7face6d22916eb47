#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::thread;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Processing {
    /// Files analyzed concurrently. Zero means one per available CPU.
    pub jobs: usize,

    /// Stop at the first file that fails instead of moving on to the next.
    pub fail_fast: bool,
}

impl Processing {
    /// Effective number of concurrent files, never zero.
    pub fn jobs(&self) -> usize {
        match self.jobs {
            0 => thread::available_parallelism().map_or(1, NonZeroUsize::get),
            jobs => jobs,
        }
    }
}
