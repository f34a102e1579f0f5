//! Foldersmith — folder-structure suggester for unsorted data.
//!
//! Thin binary entry point. All logic lives in the `foldersmith-core`
//! and `foldersmith-cli` crates.

use clap::Parser;
use foldersmith_cli::{Cli, EXIT_FAILURE};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with prompts on stdout.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Foldersmith starting");

    match foldersmith_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("Exiting with error: {err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
