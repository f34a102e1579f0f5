/// Export formats — the organization plan (JSON) and the extension tally (CSV).
///
/// These are the only files Foldersmith writes besides the folders and
/// markers created by materialization.
pub mod plan;
pub mod tally;

pub use plan::{generate_plan, write_plan, OrganizationPlan, IMPLEMENTATION_STEPS};
pub use tally::{extension_rows, write_extension_csv, ExtensionRow};
