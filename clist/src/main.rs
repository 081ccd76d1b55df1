mod config;
mod tasks;
mod transcript;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::HarnessConfig;
use tasks::Task;
use transcript::Transcript;

/// Runs the list task groups and prints a transcript meant for diffing against a reference run.
/// An unknown task name is a usage error (exit status 2).
#[derive(Parser, Debug)]
#[command(version, about)]
struct CmdOptions {
    /// Task group to run. All groups run in order when omitted
    #[arg(value_enum)]
    task: Option<Task>,
    /// Section delimiter token (overrides CLIST_DELIMITER)
    #[arg(long)]
    delimiter: Option<String>,
}

fn init_logging(filter: &str) {
    // Transcript owns stdout, so logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let options = CmdOptions::parse();

    let mut config = HarnessConfig::from_env();
    if let Some(delimiter) = options.delimiter {
        config.delimiter = delimiter;
    }
    init_logging(&config.log_filter);
    tracing::debug!(?config, "configuration loaded");

    let selected = match options.task {
        Some(task) => vec![task],
        None => Task::ALL.to_vec(),
    };

    let stdout = io::stdout();
    let mut transcript = Transcript::new(stdout.lock(), config.delimiter);
    for task in selected {
        tasks::run(task, &mut transcript).with_context(|| format!("{task:?} failed"))?;
    }
    transcript.finish().context("flushing transcript")?;
    Ok(())
}
