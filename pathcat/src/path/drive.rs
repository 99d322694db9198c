//! Drive token extraction.

/// Split a line into its drive token and the remaining tail.
///
/// The drive is the text up to and including the first `:`. Lines without a
/// colon have no drive and the whole line is the tail. This does not consult
/// platform path rules, so `C:` is recognized on every host and so is any
/// other `scheme:` prefix.
///
/// # Examples
///
/// ```
/// use pathcat::path::split_drive;
///
/// assert_eq!(split_drive(r"C:\Users"), (Some("C:"), r"\Users"));
/// assert_eq!(split_drive("/usr/lib"), (None, "/usr/lib"));
/// assert_eq!(split_drive("D:"), (Some("D:"), ""));
/// ```
#[must_use]
pub fn split_drive(line: &str) -> (Option<&str>, &str) {
    match line.find(':') {
        Some(idx) => {
            let (drive, tail) = line.split_at(idx + 1);
            (Some(drive), tail)
        }
        None => (None, line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_letter() {
        assert_eq!(split_drive(r"C:\Users\bob"), (Some("C:"), r"\Users\bob"));
    }

    #[test]
    fn test_no_colon() {
        assert_eq!(split_drive(r"\\server\share"), (None, r"\\server\share"));
        assert_eq!(split_drive("relative/dir"), (None, "relative/dir"));
    }

    #[test]
    fn test_first_colon_wins() {
        assert_eq!(split_drive("C:/a:b/c"), (Some("C:"), "/a:b/c"));
    }

    #[test]
    fn test_multi_letter_prefix() {
        assert_eq!(split_drive("smb://host/x"), (Some("smb:"), "//host/x"));
    }

    #[test]
    fn test_leading_colon() {
        assert_eq!(split_drive(":x"), (Some(":"), "x"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(split_drive(""), (None, ""));
    }

    #[test]
    fn test_non_ascii_prefix() {
        assert_eq!(split_drive("Диск:/папка"), (Some("Диск:"), "/папка"));
    }
}
