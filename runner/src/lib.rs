//! Shared plumbing for the per-day binaries: argument parsing, logging and
//! loading the puzzle input.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type Error = anyhow::Error;

/// Arguments every day's binary shares. Flatten into a day-specific parser.
#[derive(Debug, clap::Args)]
pub struct InputArgs {
    /// Puzzle input file. Defaults to the day's file under `input/`.
    pub input: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl InputArgs {
    pub fn input_or<'a>(&'a self, default: &'a str) -> &'a Path {
        self.input
            .as_deref()
            .unwrap_or_else(|| Path::new(default))
    }
}

/// Installs a compact stderr subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Reads the whole input file, dropping a single trailing line ending.
pub fn read_input(path: &Path) -> Result<String, Error> {
    let mut input = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read puzzle input from {}", path.display()))?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    tracing::debug!(path = %path.display(), bytes = input.len(), "loaded puzzle input");
    Ok(input)
}
