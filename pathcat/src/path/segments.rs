//! Segment splitting across separator conventions.

/// Characters treated as path separators.
pub const SEPARATORS: [char; 2] = ['\\', '/'];

/// Split a path tail into its non-empty segments.
///
/// Both `\` and `/` separate segments, in any mix. Runs of separators and
/// leading or trailing separators produce no empty segments.
///
/// # Examples
///
/// ```
/// use pathcat::path::split_segments;
///
/// assert_eq!(split_segments(r"/Users\\bob//docs/"), ["Users", "bob", "docs"]);
/// assert!(split_segments(r"\\").is_empty());
/// ```
#[must_use]
pub fn split_segments(tail: &str) -> Vec<&str> {
    tail.split(SEPARATORS).filter(|s| !s.is_empty()).collect()
}
