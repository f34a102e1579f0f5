/// Scan progress reporting — lightweight messages handed to the caller's
/// callback while the walk runs.

use std::path::PathBuf;
use std::time::Duration;

/// How many files pass between two [`ScanProgress::Update`] messages.
pub const UPDATE_INTERVAL: u64 = 1_000;

/// Progress updates emitted during [`crate::scanner::analyze_with`].
///
/// The report itself is only available once the walk returns; these
/// messages carry counters and status only.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanProgress {
    /// Periodic update with running totals.
    Update {
        files_found: u64,
        current_path: PathBuf,
    },
    /// An entry was skipped (unreadable metadata or directory listing).
    Skipped { path: PathBuf, message: String },
    /// The walk finished.
    Complete {
        duration: Duration,
        files_found: u64,
        skipped_entries: u64,
    },
}
