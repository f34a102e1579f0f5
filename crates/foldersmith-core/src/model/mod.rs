/// Data model for Foldersmith.
///
/// Re-exports the template tree, the analysis report, and size helpers.
pub mod report;
pub mod size;
pub mod template;

pub use report::{AnalysisReport, FileAnalysisReport, LargeFile};
pub use template::{FolderNode, FolderTemplate};
