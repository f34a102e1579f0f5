/// Recommendation heuristics derived from a finished scan.
///
/// Three rules, evaluated in order, each contributing at most one entry:
///
/// 1. Documents vs. media balance picks an approach (ties go to hybrid).
/// 2. Any oversized file suggests a dedicated large-files folder.
/// 3. A high file count suggests date-based organization.
use super::file_types::FileCategory;
use crate::catalog::Approach;
use crate::config::OrganizerSettings;
use crate::model::FileAnalysisReport;
use serde::{Serialize, Serializer};
use std::fmt;

/// A single suggestion. Renders (and serialises) as free text.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// Use the named approach for the overall layout.
    Approach(Approach),
    /// Give files above the threshold their own folder.
    LargeFilesFolder { threshold_mb: f64 },
    /// Organise by date because there are many files.
    DateBased,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approach(Approach::ByProject) => f.write_str(
                "Consider using 'by_project' approach - you have many document files",
            ),
            Self::Approach(Approach::ByType) => {
                f.write_str("Consider using 'by_type' approach - you have many media files")
            }
            Self::Approach(other) => write!(
                f,
                "Consider using '{}' for balanced organization",
                other.name()
            ),
            Self::LargeFilesFolder { threshold_mb } => write!(
                f,
                "Consider creating a separate 'Large_Files' folder for files >{threshold_mb}MB"
            ),
            Self::DateBased => f.write_str(
                "Consider using date-based organization due to large number of files",
            ),
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Rule 1 on its own: which approach the document/media balance points to.
pub fn recommended_approach(report: &FileAnalysisReport) -> Approach {
    let doc_count = report.category_count(FileCategory::Documents);
    let media_count: u64 = FileCategory::MEDIA
        .into_iter()
        .map(|cat| report.category_count(cat))
        .sum();

    match doc_count.cmp(&media_count) {
        std::cmp::Ordering::Greater => Approach::ByProject,
        std::cmp::Ordering::Less => Approach::ByType,
        std::cmp::Ordering::Equal => Approach::Hybrid,
    }
}

/// Apply all three rules to a report's tallies.
pub fn generate_recommendations(
    report: &FileAnalysisReport,
    settings: &OrganizerSettings,
) -> Vec<Recommendation> {
    let mut recommendations = vec![Recommendation::Approach(recommended_approach(report))];

    if !report.large_files.is_empty() {
        recommendations.push(Recommendation::LargeFilesFolder {
            threshold_mb: settings.large_file_threshold_mb,
        });
    }

    if report.total_files > settings.bulk_file_threshold {
        recommendations.push(Recommendation::DateBased);
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LargeFile;

    fn report(types: &[(&str, u64)]) -> FileAnalysisReport {
        FileAnalysisReport {
            total_files: types.iter().map(|(_, c)| c).sum(),
            file_types: types.iter().map(|(e, c)| (e.to_string(), *c)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn more_documents_picks_by_project() {
        let r = report(&[(".pdf", 2), (".jpg", 1)]);
        assert_eq!(recommended_approach(&r), Approach::ByProject);
    }

    #[test]
    fn more_media_picks_by_type() {
        let r = report(&[(".txt", 1), (".mp3", 1), (".mkv", 1)]);
        assert_eq!(recommended_approach(&r), Approach::ByType);
    }

    /// No documents and no media at all still yields the hybrid default.
    #[test]
    fn empty_tie_picks_hybrid() {
        let r = report(&[(".rs", 10), ("", 3)]);
        assert_eq!(recommended_approach(&r), Approach::Hybrid);
        assert_eq!(
            generate_recommendations(&r, &OrganizerSettings::default()),
            vec![Recommendation::Approach(Approach::Hybrid)]
        );
    }

    #[test]
    fn large_files_and_bulk_rules_stack() {
        let mut r = report(&[(".jpg", 1001)]);
        r.large_files.push(LargeFile {
            path: "/data/big.jpg".into(),
            size_mb: 150.0,
        });

        let recs = generate_recommendations(&r, &OrganizerSettings::default());
        assert_eq!(
            recs,
            vec![
                Recommendation::Approach(Approach::ByType),
                Recommendation::LargeFilesFolder {
                    threshold_mb: 100.0
                },
                Recommendation::DateBased,
            ]
        );
    }

    /// Exactly at the bulk threshold does not trigger the date rule.
    #[test]
    fn bulk_threshold_is_strict() {
        let r = report(&[("", 1000)]);
        let recs = generate_recommendations(&r, &OrganizerSettings::default());
        assert!(!recs.contains(&Recommendation::DateBased));
    }

    #[test]
    fn display_text() {
        assert_eq!(
            Recommendation::Approach(Approach::ByProject).to_string(),
            "Consider using 'by_project' approach - you have many document files"
        );
        assert_eq!(
            Recommendation::Approach(Approach::Hybrid).to_string(),
            "Consider using 'hybrid_approach' for balanced organization"
        );
        assert_eq!(
            Recommendation::LargeFilesFolder {
                threshold_mb: 100.0
            }
            .to_string(),
            "Consider creating a separate 'Large_Files' folder for files >100MB"
        );
        assert_eq!(
            serde_json::to_string(&Recommendation::DateBased).unwrap(),
            r#""Consider using date-based organization due to large number of files""#
        );
    }
}
