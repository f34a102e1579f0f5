/// File type categorisation based on file extensions.
///
/// Groups extensions into broad categories (Documents, Images, Videos, …).
/// The mapping only feeds recommendation heuristics and report display;
/// nothing here moves files.
use serde::Serialize;
use std::path::Path;

/// Broad file type categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Documents,
    Spreadsheets,
    Presentations,
    Images,
    Videos,
    Audio,
    Archives,
    Code,
    Data,
}

impl FileCategory {
    pub const ALL: [FileCategory; 9] = [
        Self::Documents,
        Self::Spreadsheets,
        Self::Presentations,
        Self::Images,
        Self::Videos,
        Self::Audio,
        Self::Archives,
        Self::Code,
        Self::Data,
    ];

    /// Categories whose files count as "media" for recommendations.
    pub const MEDIA: [FileCategory; 3] = [Self::Images, Self::Videos, Self::Audio];

    /// Lowercase key, as used in exported tallies.
    pub fn key(self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::Spreadsheets => "spreadsheets",
            Self::Presentations => "presentations",
            Self::Images => "images",
            Self::Videos => "videos",
            Self::Audio => "audio",
            Self::Archives => "archives",
            Self::Code => "code",
            Self::Data => "data",
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::Spreadsheets => "Spreadsheets",
            Self::Presentations => "Presentations",
            Self::Images => "Images",
            Self::Videos => "Videos",
            Self::Audio => "Audio",
            Self::Archives => "Archives",
            Self::Code => "Code",
            Self::Data => "Data",
        }
    }

    /// Recognised extensions, lowercase with leading dot.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Documents => &[".pdf", ".doc", ".docx", ".txt", ".rtf", ".odt"],
            Self::Spreadsheets => &[".xls", ".xlsx", ".csv", ".ods"],
            Self::Presentations => &[".ppt", ".pptx", ".odp"],
            Self::Images => &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".svg"],
            Self::Videos => &[".mp4", ".avi", ".mov", ".wmv", ".flv", ".mkv"],
            Self::Audio => &[".mp3", ".wav", ".flac", ".aac", ".ogg"],
            Self::Archives => &[".zip", ".rar", ".7z", ".tar", ".gz"],
            Self::Code => &[".py", ".js", ".html", ".css", ".java", ".cpp", ".c"],
            Self::Data => &[".json", ".xml", ".sql", ".db", ".sqlite"],
        }
    }
}

/// Static category → extension table.
pub struct ExtensionCategoryMap;

impl ExtensionCategoryMap {
    /// Look up the category of a normalised extension key (`".pdf"`).
    ///
    /// Keys are expected in the form produced by [`extension_key`]; an
    /// uppercase or dotless key will not match.
    pub fn category_of(extension: &str) -> Option<FileCategory> {
        FileCategory::ALL
            .into_iter()
            .find(|cat| cat.extensions().iter().any(|e| *e == extension))
    }

    /// Iterate `(category, extensions)` pairs in declaration order.
    pub fn entries() -> impl Iterator<Item = (FileCategory, &'static [&'static str])> {
        FileCategory::ALL.into_iter().map(|cat| (cat, cat.extensions()))
    }
}

/// Normalised extension key for a path: the file name from its last `.`
/// onward, lowercased.
///
/// Returns `""` for names without a dot, for dot-files such as `.bashrc`,
/// and for names ending in a bare `.`.
pub fn extension_key(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy().to_lowercase()),
        _ => String::new(),
    }
}
