/// Tunable thresholds for analysis and display.
///
/// Every field has a default, so an empty or partial TOML file is valid.
/// Unknown keys are rejected to catch typos early.
use crate::error::{OrganizerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrganizerSettings {
    /// Files strictly larger than this many megabytes are reported as large.
    pub large_file_threshold_mb: f64,
    /// More files than this triggers the date-based recommendation.
    pub bulk_file_threshold: u64,
    /// How many paths a dry-run preview prints before summarising the rest.
    pub preview_limit: usize,
}

impl Default for OrganizerSettings {
    fn default() -> Self {
        Self {
            large_file_threshold_mb: 100.0,
            bulk_file_threshold: 1_000,
            preview_limit: 10,
        }
    }
}

impl OrganizerSettings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| OrganizerError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| OrganizerError::SettingsFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}
