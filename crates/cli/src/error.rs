use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to join analysis task: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),

    #[error("Failed to analyze {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: analyzer::Error,
    },

    #[error("{failed} of {total} files could not be analyzed")]
    Incomplete { failed: usize, total: usize },
}
