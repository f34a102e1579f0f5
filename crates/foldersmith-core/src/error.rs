/// Error taxonomy for the core crate.
///
/// A missing analysis root is not represented here: it is a
/// report-shaped value ([`crate::model::AnalysisReport::Missing`]). Per-file
/// metadata failures during a scan are counted, never raised.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = OrganizerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum OrganizerError {
    /// The requested approach is not one of the four catalog entries.
    #[error("Unknown approach: {0}")]
    UnknownApproach(String),

    /// Creating a folder or its README marker failed. The traversal stops at
    /// the first failure; folders created before it are left in place.
    #[error("failed to materialize {}: {source}", path.display())]
    Materialize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An export target (plan JSON or extension CSV) could not be created.
    #[error("failed to write {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings file {} could not be read: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings file {} is invalid: {source}", path.display())]
    SettingsFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl OrganizerError {
    /// The underlying I/O error, when there is one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Materialize { source, .. }
            | Self::Export { source, .. }
            | Self::Settings { source, .. } => Some(source),
            _ => None,
        }
    }
}
