/// Foldersmith CLI — the terminal frontend over `foldersmith-core`.
///
/// Without a subcommand it runs the interactive prompt session on
/// stdin/stdout; subcommands cover the same operations non-interactively
/// plus plan and CSV export.
pub mod args;
pub mod commands;
pub mod output;
pub mod session;

pub use args::{Cli, Command};
pub use session::{Session, SessionOutcome};

use anyhow::{Context, Result};
use foldersmith_core::OrganizerSettings;
use std::io;
use tracing::info;

/// Process exit code for any error surfaced by [`run`].
pub const EXIT_FAILURE: u8 = 1;

/// Load settings and dispatch to the session or a subcommand.
pub fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => OrganizerSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => OrganizerSettings::default(),
    };
    info!("Settings: {settings:?}");

    let stdout = io::stdout();
    match &cli.command {
        None => {
            let stdin = io::stdin();
            Session::new(stdin.lock(), stdout.lock(), settings).run()?;
        }
        Some(command) => commands::execute(command, &settings, &mut stdout.lock())?,
    }
    Ok(())
}
