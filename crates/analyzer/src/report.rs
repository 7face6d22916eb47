#![forbid(unsafe_code)]

use crate::outage::OutageEvent;
use crate::summary::{FileSummary, Percentage};
use chrono::{DateTime, Utc};
use std::fmt;

pub const DEFAULT_PERCENT_PRECISION: usize = 5;

/// Render seconds as `[N day[s] ]H:MM:SS[.ffffff]`.
///
/// ```
/// # use analyzer::format_duration;
/// assert_eq!(format_duration(0.0), "0:00:00");
/// assert_eq!(format_duration(3725.0), "1:02:05");
/// assert_eq!(format_duration(22933.71), "6:22:13.710000");
/// assert_eq!(format_duration(86405.0), "1 day 0:00:05");
/// assert_eq!(format_duration(200000.0), "2 days 7:33:20");
/// ```
pub fn format_duration(secs: f64) -> String {
    let total_micros = (secs * 1e6).round_ties_even() as i64;
    let micros = total_micros.rem_euclid(1_000_000);
    let total_secs = total_micros.div_euclid(1_000_000);
    let days = total_secs.div_euclid(86_400);
    let rem = total_secs.rem_euclid(86_400);

    let mut out = String::new();
    if days != 0 {
        let plural = if days.abs() == 1 { "" } else { "s" };
        out.push_str(&format!("{days} day{plural} "));
    }
    out.push_str(&format!(
        "{}:{:02}:{:02}",
        rem / 3600,
        rem % 3600 / 60,
        rem % 60
    ));
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}

/// Render a wall-clock time as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Whole seconds, truncated toward zero.
fn whole(secs: f64) -> i64 {
    secs.trunc() as i64
}

/// Human readable report for one file: a summary line, followed by one line
/// per outage when verbose.
#[derive(Debug, Clone, Copy)]
pub struct FileReport<'a> {
    name: &'a str,
    summary: &'a FileSummary,
    verbose: bool,
    precision: usize,
}

impl<'a> FileReport<'a> {
    pub fn new(name: &'a str, summary: &'a FileSummary) -> Self {
        Self {
            name,
            summary,
            verbose: false,
            precision: DEFAULT_PERCENT_PRECISION,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Decimal places of the lost-time percentage.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn fmt_detail(&self, f: &mut fmt::Formatter<'_>, outage: &OutageEvent) -> fmt::Result {
        let prefix = if self.summary.is_longest(outage) {
            "  *"
        } else {
            "   "
        };
        let when = outage
            .absolute_start()
            .map(|time| format_timestamp(&time))
            .unwrap_or_else(|| "<Unknown>".to_owned());
        write!(
            f,
            "\n{prefix} {when}, duration {} ({}.00-{}.00)",
            format_duration(outage.duration_secs()),
            whole(outage.start_offset),
            whole(outage.end_offset)
        )
    }
}

impl fmt::Display for FileReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        write!(
            f,
            "{}: duration {}, ",
            self.name,
            format_duration(summary.elapsed_secs())
        )?;

        let Some(longest) = summary.longest() else {
            return write!(f, "0 outages");
        };
        write!(
            f,
            "longest outage {} secs, total {} outages lasting {} secs ",
            whole(longest.duration_secs()),
            summary.outages().len(),
            whole(summary.total_outage_secs())
        )?;
        match summary.percentage() {
            Percentage::Value(pct) => write!(f, "({:.*}%)", self.precision, pct)?,
            Percentage::Undefined | Percentage::NoOutages => write!(f, "(n/a)")?,
        }

        if self.verbose {
            for outage in summary.outages() {
                self.fmt_detail(f, outage)?;
            }
        }
        Ok(())
    }
}
