/// The built-in template catalog.
///
/// Four organization approaches, each backed by a fixed [`FolderTemplate`].
/// Templates are built once on first access and live until process exit.
mod templates;

use crate::error::{OrganizerError, Result};
use crate::model::FolderTemplate;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// A named organization approach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Approach {
    ByType,
    ByProject,
    ByDate,
    #[default]
    Hybrid,
}

impl Approach {
    /// Menu order: the 1-based prompt index maps onto this array.
    pub const ALL: [Approach; 4] = [Self::ByType, Self::ByProject, Self::ByDate, Self::Hybrid];

    /// Catalog key.
    pub fn name(self) -> &'static str {
        match self {
            Self::ByType => "by_type",
            Self::ByProject => "by_project",
            Self::ByDate => "by_date",
            Self::Hybrid => "hybrid_approach",
        }
    }

    /// Display title ("By Type", "Hybrid Approach", …).
    pub fn title(self) -> &'static str {
        match self {
            Self::ByType => "By Type",
            Self::ByProject => "By Project",
            Self::ByDate => "By Date",
            Self::Hybrid => "Hybrid Approach",
        }
    }

    /// Resolve a 1-based menu choice.
    pub fn from_index(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// The fixed template for this approach.
    pub fn template(self) -> &'static FolderTemplate {
        let catalog = &*CATALOG;
        match self {
            Self::ByType => &catalog.by_type,
            Self::ByProject => &catalog.by_project,
            Self::ByDate => &catalog.by_date,
            Self::Hybrid => &catalog.hybrid,
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Approach {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for Approach {
    type Err = OrganizerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| OrganizerError::UnknownApproach(s.to_string()))
    }
}

struct Catalog {
    by_type: FolderTemplate,
    by_project: FolderTemplate,
    by_date: FolderTemplate,
    hybrid: FolderTemplate,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    by_type: templates::by_type(),
    by_project: templates::by_project(),
    by_date: templates::by_date(),
    hybrid: templates::hybrid(),
});

/// Look up a template by approach name.
///
/// Fails with [`OrganizerError::UnknownApproach`] for anything outside the
/// four catalog keys.
pub fn suggest(name: &str) -> Result<&'static FolderTemplate> {
    name.parse::<Approach>().map(Approach::template)
}
