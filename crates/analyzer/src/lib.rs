#![forbid(unsafe_code)]

pub mod classifier;
mod error;
pub mod event;
pub mod outage;
pub mod processor;
pub mod report;
pub mod summary;
pub mod tracker;

pub use classifier::{Iperf3Classifier, LineClassifier};
pub use error::Error;
pub use event::{IntervalRecord, LineEvent, TimestampRecord};
pub use outage::OutageEvent;
pub use processor::FileProcessor;
pub use report::{FileReport, format_duration, format_timestamp};
pub use summary::{FileSummary, Percentage};
pub use tracker::{OutageTracker, Phase, SegmentState, TrackerOutput};
