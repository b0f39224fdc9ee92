use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stacklog::{LoggingConfig, ResultExt, TracedError};

/// Runs a failing job and reports its error trace
#[derive(Parser, Debug)]
#[command(version, about)]
struct Options {
    /// Emit DEBUG lines
    #[arg(short, long)]
    debug: bool,

    /// Write log lines to this file instead of stdout
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Outermost frames to leave out of stack reports
    #[arg(short, long)]
    skip: Option<usize>,

    /// Prefix each line with a timestamp
    #[arg(short, long)]
    timestamps: bool,

    /// Filter directives in `env_logger` syntax, e.g. "info,hyper=off"
    #[arg(long, env = "RUST_LOG")]
    filter: Option<String>,
}

fn main() -> Result<()> {
    let opts = Options::parse();

    let mut config = LoggingConfig::new()
        .debug(opts.debug)
        .timestamps(opts.timestamps);
    if let Some(path) = &opts.log_file {
        config = config.file(path);
    }
    if let Some(skip) = opts.skip {
        config = config.skip_frames(skip);
    }
    if let Some(filter) = &opts.filter {
        config = config.env_filter(filter.as_str());
    }

    stacklog::init_with(config).context("failed to set up logging")?;

    stacklog::debug!("options: {opts:?}");
    stacklog::info!("stacklog demo starting");
    log::info!("records from the log facade land in the same sink");

    if let Err(err) = run_job("nightly-export") {
        stacklog::error!("job failed, reporting trace");
        stacklog::error_with_stack("nightly-export aborted", &err);
    }

    let plain = std::io::Error::other("no trace attached");
    stacklog::error_with_stack("plain error", &plain);

    stacklog::error_custom!("-- demo finished --");
    Ok(())
}

fn run_job(name: &str) -> Result<(), TracedError> {
    stacklog::debug!("running job {name}");
    export_rows(name).wrap_traced(format!("job {name}"))
}

fn export_rows(name: &str) -> Result<(), TracedError> {
    let rows = fetch_rows(name).traced()?;
    stacklog::info!("exporting {} rows", rows.len());
    Ok(())
}

fn fetch_rows(name: &str) -> Result<Vec<String>, TracedError> {
    let path = PathBuf::from(format!("/nonexistent/{name}.csv"));
    let text = std::fs::read_to_string(&path).wrap_traced(format!("reading {}", path.display()))?;
    Ok(text.lines().map(str::to_owned).collect())
}
