use crate::error::Error;
use analyzer::{FileProcessor, FileReport, FileSummary, Iperf3Classifier};
use config::Config;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub verbose: bool,
    pub precision: usize,
    pub jobs: usize,
    pub fail_fast: bool,
}

impl From<&Config> for RunOptions {
    fn from(config: &Config) -> Self {
        let report = config.report.clamp();
        Self {
            verbose: report.verbose,
            precision: report.percent_precision,
            jobs: config.processing.jobs(),
            fail_fast: config.processing.fail_fast,
        }
    }
}

type FileResult = Result<FileSummary, analyzer::Error>;

/// Analyze `files` concurrently and write their reports to `out` in the
/// order given. Files that fail are reported on `err`.
///
/// Returns the number of files reported. Unless `fail_fast` is set, a failed
/// file does not stop the others, the failure count is returned as
/// [`Error::Incomplete`] once all of them are done.
pub async fn run(
    files: Vec<PathBuf>,
    options: RunOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<usize, Error> {
    let processor = Arc::new(FileProcessor::new(Iperf3Classifier));
    let total = files.len();
    // more permits than files buys nothing and tokio caps the count
    let jobs = options.jobs.clamp(1, total.max(1));
    let semaphore = Arc::new(Semaphore::new(jobs));

    let handles: Vec<(PathBuf, JoinHandle<_>)> = files
        .into_iter()
        .map(|path| {
            let handle = spawn_analysis(path.clone(), processor.clone(), semaphore.clone());
            (path, handle)
        })
        .collect();

    let mut reported = 0;
    let mut failed = 0;
    for (path, handle) in handles {
        // `None` only once the semaphore was closed by a fail-fast abort
        let Some(result) = handle.await?? else {
            continue;
        };
        match result {
            Ok(summary) => {
                let name = path.display().to_string();
                let report = FileReport::new(&name, &summary)
                    .verbose(options.verbose)
                    .precision(options.precision);
                writeln!(out, "{report}")?;
                reported += 1;
            }
            Err(source) => {
                error!(path = %path.display(), error = %source, "failed to analyze file");
                if options.fail_fast {
                    semaphore.close();
                    return Err(Error::File { path, source });
                }
                writeln!(err, "{}: {source}", path.display())?;
                failed += 1;
            }
        }
    }

    debug!(reported, failed, "all files processed");
    if failed > 0 {
        return Err(Error::Incomplete { failed, total });
    }
    Ok(reported)
}

fn spawn_analysis(
    path: PathBuf,
    processor: Arc<FileProcessor>,
    semaphore: Arc<Semaphore>,
) -> JoinHandle<Result<Option<FileResult>, tokio::task::JoinError>> {
    tokio::spawn(async move {
        let Ok(_permit) = semaphore.acquire_owned().await else {
            return Ok(None);
        };
        tokio::task::spawn_blocking(move || processor.process_path(&path))
            .await
            .map(Some)
    })
}
