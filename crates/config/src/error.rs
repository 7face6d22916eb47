#![forbid(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),
}
