/// Extension tally export as CSV.
use crate::analysis::file_types::ExtensionCategoryMap;
use crate::error::{OrganizerError, Result};
use crate::model::FileAnalysisReport;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// One CSV row. `category` is empty for extensions outside the category map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionRow {
    pub extension: String,
    pub category: String,
    pub count: u64,
}

/// Rows sorted by count descending, then extension ascending.
pub fn extension_rows(report: &FileAnalysisReport) -> Vec<ExtensionRow> {
    let mut rows: Vec<ExtensionRow> = report
        .file_types
        .iter()
        .map(|(ext, &count)| ExtensionRow {
            extension: ext.clone(),
            category: ExtensionCategoryMap::category_of(ext)
                .map(|c| c.key().to_string())
                .unwrap_or_default(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.extension.cmp(&b.extension)));
    rows
}

/// Write the report's extension tally to `output`.
pub fn write_extension_csv(report: &FileAnalysisReport, output: &Path) -> Result<()> {
    let file = File::create(output).map_err(|source| OrganizerError::Export {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);
    for row in extension_rows(report) {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|source| OrganizerError::Export {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(())
}
