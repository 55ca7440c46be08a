//! `lexgrid` command-line solver.
//!
//! Prints the board, then one `WORD<TAB>route` line per found word as
//! workers find them. Logs go to stderr; set `RUST_LOG` to see them.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = cli::Cli::parse();
    match cli::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "lexgrid failed");
            eprintln!("lexgrid: {e}");
            ExitCode::FAILURE
        }
    }
}
