/// Foldersmith Core — template catalog, materialization, and analysis.
///
/// This crate contains all business logic with zero terminal I/O.
/// It is designed to be reusable across different frontends (CLI, TUI, GUI).
///
/// # Modules
///
/// - [`model`] — Folder templates, analysis reports, and size helpers.
/// - [`catalog`] — The four built-in organization approaches.
/// - [`materialize`] — Turning a template into real directories (or a dry run).
/// - [`scanner`] — Serial directory walk that builds a [`model::FileAnalysisReport`].
/// - [`analysis`] — Extension categories and recommendation heuristics.
/// - [`export`] — Organization plans (JSON) and extension tallies (CSV).
/// - [`config`] — Tunable thresholds loaded from TOML.
pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod materialize;
pub mod model;
pub mod render;
pub mod scanner;

pub use catalog::{suggest, Approach};
pub use config::OrganizerSettings;
pub use error::{OrganizerError, Result};
pub use materialize::{materialize, MaterializationResult};
pub use model::{AnalysisReport, FileAnalysisReport, FolderNode, FolderTemplate, LargeFile};
pub use render::render;
pub use scanner::{analyze, analyze_with};
