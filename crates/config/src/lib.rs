#![forbid(unsafe_code)]

mod error;
mod processing;
mod report;

pub use error::Error;
pub use processing::Processing;
pub use report::Report;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings read from the optional configuration file.
///
/// ```toml
/// [report]
/// verbose = true
/// percent_precision = 3
///
/// [processing]
/// jobs = 4
/// fail_fast = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub report: Report,
    pub processing: Processing,
}

impl Config {
    /// Configuration with every value at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the TOML file at `path`, with defaults for missing keys.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .extract::<Self>()
            .map_err(Box::new)?;
        Ok(config)
    }
}
