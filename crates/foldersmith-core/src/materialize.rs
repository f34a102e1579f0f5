/// Template materialization — turning a [`FolderTemplate`] into directories.
///
/// The traversal is depth-first, pre-order: every folder's path is recorded
/// before its children, and siblings follow declaration order. In a dry run
/// the same sequence is produced without touching the filesystem.
///
/// Each created folder gets a `README.md` marker describing it. Existing
/// markers are never overwritten; the marker is opened with `create_new`, so
/// a file that appears between the directory creation and the write is also
/// left alone.
use crate::error::{OrganizerError, Result};
use crate::model::{FolderNode, FolderTemplate};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the marker written into every created folder.
pub const MARKER_FILE: &str = "README.md";

/// Outcome of a [`materialize`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializationResult {
    /// Absolute folder paths in pre-order, one per template node.
    pub folders: Vec<PathBuf>,
    /// Markers newly written by this call. Always 0 for a dry run.
    pub markers_written: usize,
    pub dry_run: bool,
}

impl MaterializationResult {
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

/// Walk `template` beneath `base_path`, creating folders unless `dry_run`.
///
/// `base_path` is made absolute against the current directory; symlinks are
/// not resolved and the base need not exist.
///
/// The first directory or marker failure aborts the walk. Folders already
/// created by this call stay on disk.
pub fn materialize(
    base_path: &Path,
    template: &FolderTemplate,
    dry_run: bool,
) -> Result<MaterializationResult> {
    let base = std::path::absolute(base_path).map_err(|source| OrganizerError::Materialize {
        path: base_path.to_path_buf(),
        source,
    })?;

    info!(
        "Materializing {} folders under {}{}",
        template.node_count(),
        base.display(),
        if dry_run { " (dry run)" } else { "" }
    );

    let mut result = MaterializationResult {
        folders: Vec::with_capacity(template.node_count()),
        markers_written: 0,
        dry_run,
    };
    walk(&base, template, &mut result)?;

    info!(
        "Materialization complete: {} folders, {} markers written",
        result.folders.len(),
        result.markers_written
    );
    Ok(result)
}

fn walk(
    current: &Path,
    template: &FolderTemplate,
    result: &mut MaterializationResult,
) -> Result<()> {
    for (name, node) in template.iter() {
        let folder_path = current.join(name);
        result.folders.push(folder_path.clone());

        if !result.dry_run {
            let wrote_marker =
                create_folder(&folder_path, name).map_err(|source| OrganizerError::Materialize {
                    path: folder_path.clone(),
                    source,
                })?;
            if wrote_marker {
                result.markers_written += 1;
            }
        }

        if let FolderNode::Nested(children) = node {
            walk(&folder_path, children, result)?;
        }
    }
    Ok(())
}

/// Create `path` (and missing parents) and its marker.
///
/// Returns `true` when a new marker was written.
fn create_folder(path: &Path, name: &str) -> io::Result<bool> {
    fs::create_dir_all(path)?;
    debug!("Created {}", path.display());

    let marker = path.join(MARKER_FILE);
    match OpenOptions::new().write(true).create_new(true).open(&marker) {
        Ok(mut file) => {
            file.write_all(marker_contents(name).as_bytes())?;
            Ok(true)
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(err) => Err(err),
    }
}

/// Marker body: a heading plus a one-line description derived from the
/// folder name.
pub fn marker_contents(name: &str) -> String {
    format!(
        "# {name}\n\nThis folder is for organizing {} files.\n",
        describe(name)
    )
}

/// Lowercase a folder name and turn underscores into spaces.
fn describe(name: &str) -> String {
    name.to_lowercase().replace('_', " ")
}
