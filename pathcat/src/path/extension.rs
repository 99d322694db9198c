//! File-versus-folder heuristic.

/// Longest extension accepted when it is not purely alphabetic.
pub const MAX_MIXED_EXTENSION_LEN: usize = 5;

/// Return the text after the last `.` of a segment, if there is a dot.
///
/// # Examples
///
/// ```
/// use pathcat::path::extension;
///
/// assert_eq!(extension("archive.tar.gz"), Some("gz"));
/// assert_eq!(extension("notes"), None);
/// assert_eq!(extension("trailing."), Some(""));
/// ```
#[must_use]
pub fn extension(segment: &str) -> Option<&str> {
    segment.rsplit_once('.').map(|(_, ext)| ext)
}

/// Decide whether a segment names a file.
///
/// A segment is a file name when its extension is non-empty and either
/// - consists only of alphabetic characters (`pdf`, `docx`, `markdown`), or
/// - is at most [`MAX_MIXED_EXTENSION_LEN`] characters and not only
///   ASCII digits (`v2`, `mp4`, `7z`).
///
/// Numeric suffixes such as `backup.123` and dot-less names are folders.
///
/// # Examples
///
/// ```
/// use pathcat::path::is_file_name;
///
/// assert!(is_file_name("report.pdf"));
/// assert!(is_file_name("archive.v2"));
/// assert!(!is_file_name("backup.123"));
/// assert!(!is_file_name("notes"));
/// ```
#[must_use]
pub fn is_file_name(segment: &str) -> bool {
    let Some(ext) = extension(segment) else {
        return false;
    };
    if ext.is_empty() {
        return false;
    }

    if ext.chars().all(char::is_alphabetic) {
        return true;
    }

    ext.chars().count() <= MAX_MIXED_EXTENSION_LEN && !ext.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabetic_extensions() {
        for name in ["report.pdf", "a.docx", "sheet.xlsx", "README.markdown", "x.TXT"] {
            assert!(is_file_name(name), "{name} should be a file");
        }
    }

    #[test]
    fn test_short_mixed_extensions() {
        for name in ["archive.v2", "movie.mp4", "pack.7z", "data.h5", "lib.so_1"] {
            assert!(is_file_name(name), "{name} should be a file");
        }
    }

    #[test]
    fn test_numeric_extensions_are_folders() {
        for name in ["backup.123", "release.2024", "v.1", "ip.10.0.0.1"] {
            assert!(!is_file_name(name), "{name} should be a folder");
        }
    }

    #[test]
    fn test_non_ascii_numerals_are_not_digits() {
        for name in ["x.½", "chapter.Ⅻ", "scan.v½"] {
            assert!(is_file_name(name), "{name} should be a file");
        }
    }

    #[test]
    fn test_long_mixed_extension_is_folder() {
        assert!(!is_file_name("build.abc123"));
    }

    #[test]
    fn test_no_dot_is_folder() {
        assert!(!is_file_name("notes"));
        assert!(!is_file_name(""));
    }

    #[test]
    fn test_empty_extension_is_folder() {
        assert!(!is_file_name("trailing."));
        assert!(!is_file_name(".."));
    }

    #[test]
    fn test_dotfile() {
        assert!(is_file_name(".bashrc"));
        assert_eq!(extension(".bashrc"), Some("bashrc"));
    }

    #[test]
    fn test_unicode_extension() {
        assert!(is_file_name("документ.тхт"));
    }

    #[test]
    fn test_only_last_dot_counts() {
        assert!(is_file_name("v1.2.final"));
        assert!(!is_file_name("name.tar.2"));
    }
}
