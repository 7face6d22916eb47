use clap::{CommandFactory, Parser};
use config::Config;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Find the periods of zero throughput in iperf3 logs.
///
/// Every file is summarized on one line: the total test duration, the
/// longest outage, and how much of the test time was lost to outages.
/// Tests found in the same file are added together.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Print one line per outage, the longest ones marked with `*`.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, value_parser = validate_file)]
    pub conffile: Option<PathBuf>,

    /// Number of files analyzed concurrently.
    ///
    /// Zero means one per available CPU.
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Abort at the first file that cannot be analyzed.
    #[arg(long)]
    pub fail_fast: bool,

    /// iperf3 log files.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Let command line flags take precedence over the configuration file.
    pub fn apply(&self, config: &mut Config) {
        config.report.verbose |= self.verbose;
        config.processing.fail_fast |= self.fail_fast;
        if let Some(jobs) = self.jobs {
            config.processing.jobs = jobs;
        }
    }

    /// Write the usage message to `err` when no log file was given.
    ///
    /// Returns the exit code to terminate with, if any.
    pub fn check_files(&self, err: &mut impl Write) -> io::Result<Option<ExitCode>> {
        if !self.files.is_empty() {
            return Ok(None);
        }
        writeln!(err, "{}", Self::command().render_usage())?;
        Ok(Some(ExitCode::FAILURE))
    }
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_verbose_and_files() {
        let cli = Cli::try_parse_from(["iperf-outages", "-v", "a.log", "b.log"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.files, vec![PathBuf::from("a.log"), PathBuf::from("b.log")]);
    }

    #[test]
    fn test_no_files_prints_usage() {
        let cli = Cli::try_parse_from(["iperf-outages"]).unwrap();
        let mut err = Vec::new();

        let code = cli.check_files(&mut err).unwrap();

        assert!(code.is_some());
        let usage = String::from_utf8(err).unwrap();
        assert!(usage.starts_with("Usage:"));
        assert!(usage.contains("[FILE]..."));
    }

    #[test]
    fn test_files_given_prints_nothing() {
        let cli = Cli::try_parse_from(["iperf-outages", "a.log"]).unwrap();
        let mut err = Vec::new();

        assert!(cli.check_files(&mut err).unwrap().is_none());
        assert!(err.is_empty());
    }

    #[test]
    fn test_missing_conffile_is_rejected() {
        let res = Cli::try_parse_from(["iperf-outages", "-c", "/nonexistent.toml", "a.log"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::try_parse_from(["iperf-outages", "-v", "-j", "2", "a.log"]).unwrap();
        let mut config = Config::new();
        config.processing.fail_fast = true;
        cli.apply(&mut config);

        assert!(config.report.verbose);
        assert!(config.processing.fail_fast);
        assert_eq!(config.processing.jobs, 2);
    }
}
