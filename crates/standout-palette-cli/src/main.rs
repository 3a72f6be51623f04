//! `palette`: expand seed colors into palettes and light/dark themes.
//!
//! ```text
//! palette expand solarized.yaml
//! palette theme solarized.yaml --mode auto --format json
//! palette contrast "#073642" "#fdf6e3"
//! ```

mod cli;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

/// Logs go to stderr so command output stays pipeable. `-v` wins over
/// `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
