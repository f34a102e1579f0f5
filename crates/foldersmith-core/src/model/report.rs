/// Analysis report types produced by [`crate::scanner::analyze`].
use crate::analysis::file_types::{ExtensionCategoryMap, FileCategory};
use crate::analysis::recommend::Recommendation;
use serde::Serialize;
use std::collections::BTreeMap;

/// A file whose size exceeded the large-file threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LargeFile {
    /// Full path as discovered by the walk.
    pub path: String,
    /// Size in megabytes (bytes / 1 048 576), rounded to 2 decimal places.
    pub size_mb: f64,
}

/// Tallies for one completed scan. Immutable once returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileAnalysisReport {
    pub total_files: u64,
    /// Lowercased extension (with leading dot, or `""`) → occurrence count.
    pub file_types: BTreeMap<String, u64>,
    pub large_files: Vec<LargeFile>,
    pub recommendations: Vec<Recommendation>,
    /// Entries whose metadata could not be read or directories that could
    /// not be listed. The walk continues past every one of them.
    pub skipped_entries: u64,
}

impl FileAnalysisReport {
    /// Occurrences of a single extension key (`".pdf"`, `""`, …).
    pub fn count_of(&self, extension: &str) -> u64 {
        self.file_types.get(extension).copied().unwrap_or(0)
    }

    /// Sum of counts over every extension belonging to `category`.
    pub fn category_count(&self, category: FileCategory) -> u64 {
        category
            .extensions()
            .iter()
            .map(|ext| self.count_of(ext))
            .sum()
    }

    /// Per-category totals, largest first. Extensions outside the category
    /// map are reported under `None`. Categories with no files are omitted.
    pub fn category_breakdown(&self) -> Vec<(Option<FileCategory>, u64)> {
        let mut totals: BTreeMap<Option<FileCategory>, u64> = BTreeMap::new();
        for (ext, &count) in &self.file_types {
            *totals.entry(ExtensionCategoryMap::category_of(ext)).or_default() += count;
        }
        let mut results: Vec<(Option<FileCategory>, u64)> = totals.into_iter().collect();
        results.sort_by(|a, b| b.1.cmp(&a.1));
        results
    }
}

/// Outcome of analysing a path.
///
/// A missing root is a value, not an error: the `Missing` variant serialises
/// as `{"error": "..."}` so exported plans keep the same shape either way.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    Completed(FileAnalysisReport),
    Missing { error: String },
}

impl AnalysisReport {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Missing { error } => Some(error),
            Self::Completed(_) => None,
        }
    }

    /// The report, when the scan actually ran.
    pub fn report(&self) -> Option<&FileAnalysisReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Missing { .. } => None,
        }
    }

    pub fn into_report(self) -> Option<FileAnalysisReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Missing { .. } => None,
        }
    }
}
