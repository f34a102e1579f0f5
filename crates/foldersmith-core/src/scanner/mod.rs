/// Scanner module — walks a directory tree and tallies what it finds.
///
/// The walk is serial (`jwalk` with `Parallelism::Serial`) and blocks the
/// caller until it finishes. Symlinked directories are not descended into;
/// symlinks that resolve to regular files are counted like files.
///
/// Per-entry failures never abort a scan. A regular file whose size cannot
/// be read is still counted and also adds one to `skipped_entries`, as does
/// an unresolvable link or an unreadable directory.
pub mod progress;

use crate::analysis::{extension_key, generate_recommendations};
use crate::config::OrganizerSettings;
use crate::model::size::{bytes_to_mb, round2};
use crate::model::{AnalysisReport, FileAnalysisReport, LargeFile};
use progress::{ScanProgress, UPDATE_INTERVAL};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Analyse `root` with default settings and no progress reporting.
pub fn analyze(root: &Path) -> AnalysisReport {
    analyze_with(root, &OrganizerSettings::default(), |_| {})
}

/// Analyse `root`, reporting progress through `on_progress`.
///
/// Returns [`AnalysisReport::Missing`] when `root` does not exist. The
/// tree is only read, never modified.
pub fn analyze_with<F>(
    root: &Path,
    settings: &OrganizerSettings,
    mut on_progress: F,
) -> AnalysisReport
where
    F: FnMut(&ScanProgress),
{
    if !root.exists() {
        info!("Analysis root {} does not exist", root.display());
        return AnalysisReport::Missing {
            error: format!("Path {} does not exist", root.display()),
        };
    }

    info!("Starting analysis of {}", root.display());
    let start = Instant::now();
    let mut report = FileAnalysisReport::default();

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                warn!("Skipping unreadable entry {}: {err}", path.display());
                skip(&mut report, &mut on_progress, path, err.to_string());
                continue;
            }
        };

        // jwalk yields an unreadable directory as an entry carrying the
        // listing error; its contents are simply absent from the walk.
        if let Some(err) = &entry.read_children_error {
            let path = entry.path();
            warn!("Skipping unreadable directory {}: {err}", path.display());
            let message = err.to_string();
            skip(&mut report, &mut on_progress, path, message);
        }

        // The root itself is never tallied, even when it is a file.
        if entry.depth == 0 {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }

        let path = entry.path();
        let size = if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => Ok(meta.len()),
                // Links to directories or other non-files.
                Ok(_) => continue,
                // Dangling link: there is no file behind it.
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => {
                    debug!("Could not resolve link {}: {err}", path.display());
                    skip(&mut report, &mut on_progress, path, err.to_string());
                    continue;
                }
            }
        } else if file_type.is_file() {
            fs::metadata(&path).map(|meta| meta.len())
        } else {
            // Sockets, FIFOs, devices.
            continue;
        };

        report.total_files += 1;
        *report.file_types.entry(extension_key(&path)).or_insert(0) += 1;

        match size {
            Ok(bytes) => {
                let size_mb = bytes_to_mb(bytes);
                if size_mb > settings.large_file_threshold_mb {
                    report.large_files.push(LargeFile {
                        path: path.to_string_lossy().into_owned(),
                        size_mb: round2(size_mb),
                    });
                }
            }
            Err(err) => {
                debug!("Could not read size of {}: {err}", path.display());
                let message = err.to_string();
                skip(&mut report, &mut on_progress, path.clone(), message);
            }
        }

        if report.total_files % UPDATE_INTERVAL == 0 {
            on_progress(&ScanProgress::Update {
                files_found: report.total_files,
                current_path: path,
            });
        }
    }

    report.recommendations = generate_recommendations(&report, settings);

    let duration = start.elapsed();
    info!(
        "Analysis complete: {} files, {} extensions, {} large, {} skipped in {:?}",
        report.total_files,
        report.file_types.len(),
        report.large_files.len(),
        report.skipped_entries,
        duration
    );
    on_progress(&ScanProgress::Complete {
        duration,
        files_found: report.total_files,
        skipped_entries: report.skipped_entries,
    });

    AnalysisReport::Completed(report)
}

fn skip<F>(report: &mut FileAnalysisReport, on_progress: &mut F, path: PathBuf, message: String)
where
    F: FnMut(&ScanProgress),
{
    report.skipped_entries += 1;
    on_progress(&ScanProgress::Skipped { path, message });
}
