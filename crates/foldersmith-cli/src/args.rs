/// Command-line argument model.
///
/// With no subcommand the binary runs the interactive prompt session.
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(
    name = "foldersmith",
    version,
    about = "Suggest, create, and pick folder structures for unsorted data"
)]
pub struct Cli {
    /// TOML settings file (thresholds and preview size).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Maximum tracing level implied by `-v` flags. Warnings only by default.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available organization approaches.
    List,

    /// Print the folder tree of one approach.
    Show {
        /// Approach name (by_type, by_project, by_date, hybrid_approach).
        approach: String,
    },

    /// Create an approach's folders under a base path (dry run by default).
    Create {
        approach: String,
        base: PathBuf,
        /// Actually create folders and README markers.
        #[arg(long)]
        apply: bool,
    },

    /// Scan a directory and recommend an approach.
    Analyze {
        path: PathBuf,
        /// Also write the extension tally as CSV.
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },

    /// Build a full organization plan (analysis + template + checklist).
    Plan {
        path: PathBuf,
        /// Approach to use; defaults to the one the analysis recommends.
        #[arg(long)]
        approach: Option<String>,
        /// Write the plan JSON here instead of printing it.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
