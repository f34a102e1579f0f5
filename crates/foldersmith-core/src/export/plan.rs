/// Organization plans: analysis + chosen template + checklist, as JSON.
use crate::catalog::Approach;
use crate::config::OrganizerSettings;
use crate::error::{OrganizerError, Result};
use crate::model::{AnalysisReport, FolderTemplate};
use crate::scanner::analyze_with;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// The fixed checklist attached to every plan.
pub const IMPLEMENTATION_STEPS: [&str; 6] = [
    "1. Backup your original data",
    "2. Create the suggested folder structure",
    "3. Sort files by type/category",
    "4. Move files to appropriate folders",
    "5. Create index/catalog files",
    "6. Set up regular maintenance schedule",
];

/// Everything needed to reorganise one data directory.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationPlan {
    /// Local time of generation, ISO-8601 with microseconds.
    pub timestamp: String,
    pub data_path: String,
    pub approach: Approach,
    pub analysis: AnalysisReport,
    pub suggested_structure: FolderTemplate,
    pub implementation_steps: Vec<String>,
}

impl OrganizationPlan {
    /// Pair an existing analysis with `approach`'s template, stamped now.
    pub fn new(data_path: &Path, approach: Approach, analysis: AnalysisReport) -> Self {
        Self {
            timestamp: chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            data_path: data_path.display().to_string(),
            approach,
            analysis,
            suggested_structure: approach.template().clone(),
            implementation_steps: IMPLEMENTATION_STEPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Analyse `data_path` and pair the result with `approach`'s template.
///
/// A missing path still yields a plan; its `analysis` carries the error.
pub fn generate_plan(
    data_path: &Path,
    approach: Approach,
    settings: &OrganizerSettings,
) -> OrganizationPlan {
    let analysis = analyze_with(data_path, settings, |_| {});
    OrganizationPlan::new(data_path, approach, analysis)
}

/// Write `plan` as pretty-printed JSON (two-space indent, UTF-8).
pub fn write_plan(plan: &OrganizationPlan, output: &Path) -> Result<()> {
    let file = File::create(output).map_err(|source| OrganizerError::Export {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, plan)?;
    writer.flush().map_err(|source| OrganizerError::Export {
        path: output.to_path_buf(),
        source,
    })?;

    info!("Wrote organization plan to {}", output.display());
    Ok(())
}
