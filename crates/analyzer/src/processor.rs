#![forbid(unsafe_code)]

use crate::Error;
use crate::classifier::{Iperf3Classifier, LineClassifier};
use crate::event::LineEvent;
use crate::summary::FileSummary;
use crate::tracker::OutageTracker;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, debug_span};

/// Drives the lines of one log through classification and outage tracking.
///
/// Holds no per-file state, a single processor can serve many files.
#[derive(Debug, Default, Clone)]
pub struct FileProcessor<C = Iperf3Classifier> {
    classifier: C,
}

impl<C: LineClassifier> FileProcessor<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn process_path(&self, path: &Path) -> Result<FileSummary, Error> {
        let _span = debug_span!("file", path = %path.display()).entered();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        self.process_reader(BufReader::new(file))
    }

    pub fn process_reader(&self, reader: impl BufRead) -> Result<FileSummary, Error> {
        let mut tracker = OutageTracker::new();
        let mut lines = 0;

        for (idx, line) in reader.lines().enumerate() {
            lines = idx + 1;
            let line = line.map_err(|source| Error::Read {
                line: lines,
                source,
            })?;
            let event = self
                .classifier
                .classify(&line)
                .map_err(|err| err.at_line(lines))?;
            if let LineEvent::Timestamp(record) = &event {
                debug!(line = lines, time = %record.time, "found timestamp");
            }
            tracker.process(&event);
        }

        let output = tracker.finish();
        debug!(
            lines,
            segments = output.segments,
            outages = output.outages.len(),
            elapsed = output.elapsed_secs,
            "file processed"
        );
        Ok(output.into())
    }
}
