use clap::Parser;
use config::Config;
use iperf_outages::{
    cli::Cli,
    runner::{self, RunOptions},
};
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable holding the log filter, e.g. `debug`.
const LOG_ENV: &str = "IPERF_OUTAGES_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var(LOG_ENV)
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(cli = ?cli);

    if let Some(code) = cli.check_files(&mut io::stderr())? {
        return Ok(code);
    }

    let mut config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        _ => Config::new(),
    };
    cli.apply(&mut config);
    debug!(?config, "effective configuration");

    runner::run(
        cli.files,
        RunOptions::from(&config),
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await?;
    Ok(ExitCode::SUCCESS)
}
