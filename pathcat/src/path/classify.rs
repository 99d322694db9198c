//! Line classification.

use super::drive::split_drive;
use super::entry::PathEntry;
use super::extension::is_file_name;
use super::segments::split_segments;

/// Label used as the drive of lines without a colon.
pub const DEFAULT_NO_DRIVE_LABEL: &str = "No Drive";

/// Separator used when rebuilding the folder path.
pub const DEFAULT_SEPARATOR: char = '\\';

/// Options controlling classification.
///
/// # Examples
///
/// ```
/// use pathcat::path::ClassifyOptions;
///
/// let options = ClassifyOptions {
///     filter_files: true,
///     ..Default::default()
/// };
/// assert_eq!(options.separator, '\\');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyOptions {
    /// Skip lines whose last segment is not a file name.
    pub filter_files: bool,
    /// Separator for [`PathEntry::folder_path`].
    pub separator: char,
    /// Drive value for lines without a drive token.
    pub no_drive_label: String,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            filter_files: false,
            separator: DEFAULT_SEPARATOR,
            no_drive_label: DEFAULT_NO_DRIVE_LABEL.to_string(),
        }
    }
}

/// Classify one trimmed line.
///
/// Returns `None` when the line is skipped: it has no segments after the
/// drive (blank or root-only lines), or `filter_files` is set and the last
/// segment is not a file name. Never fails otherwise.
///
/// # Examples
///
/// ```
/// use pathcat::path::{classify, ClassifyOptions};
///
/// let options = ClassifyOptions::default();
/// assert!(classify("", &options).is_none());
/// assert!(classify(r"C:\", &options).is_none());
///
/// let entry = classify("C:/Users\\bob/docs", &options).unwrap();
/// assert_eq!(entry.segments(), ["Users", "bob", "docs"]);
/// assert!(!entry.is_file());
///
/// let filtering = ClassifyOptions { filter_files: true, ..Default::default() };
/// assert!(classify(r"C:\a\b", &filtering).is_none());
/// ```
#[must_use]
pub fn classify(line: &str, options: &ClassifyOptions) -> Option<PathEntry> {
    let (drive, tail) = split_drive(line);
    let segments = split_segments(tail);
    let last = segments.last()?;

    let is_file = is_file_name(last);
    if options.filter_files && !is_file {
        return None;
    }

    let drive = drive.unwrap_or(options.no_drive_label.as_str()).to_string();
    let segments = segments.into_iter().map(str::to_string).collect();
    Some(PathEntry::new(drive, segments, is_file, options.separator))
}
