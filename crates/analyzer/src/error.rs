#![forbid(unsafe_code)]

use std::path::PathBuf;

/// Represents all possible errors that can occur while analyzing a log.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The log file could not be opened.
    #[error("Failed to open {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a line from the log failed midway.
    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A `Time:` line carried a date that does not parse.
    ///
    /// Line number is zero when the classifier is used outside of a
    /// [`FileProcessor`](crate::FileProcessor).
    #[error("Malformed timestamp on line {line}: {value:?}: {source}")]
    MalformedTimestamp {
        line: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A numeric column of an interval line does not parse as a float.
    #[error("Malformed number on line {line}: {value:?}: {source}")]
    MalformedNumber {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

impl Error {
    /// Attach the 1-based line number to a classification error.
    pub(crate) fn at_line(self, n: usize) -> Self {
        match self {
            Self::MalformedTimestamp { value, source, .. } => Self::MalformedTimestamp {
                line: n,
                value,
                source,
            },
            Self::MalformedNumber { value, source, .. } => Self::MalformedNumber {
                line: n,
                value,
                source,
            },
            other => other,
        }
    }
}
