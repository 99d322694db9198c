//! Path classification.
//!
//! This module turns a single line of a path listing into a [`PathEntry`]:
//! a drive token, the ordered path segments, and a decision whether the last
//! segment names a file or a folder.
//!
//! # Drive Extraction
//!
//! Drives are found by explicit colon splitting, independent of the host
//! platform. Everything up to and including the first `:` is the drive;
//! lines without a colon get a configurable "no drive" label.
//!
//! # Segments
//!
//! The remainder is split on runs of `\` and `/`, so Windows, POSIX and mixed
//! listings all decompose the same way. Empty segments are dropped; a line
//! with no segments left is skipped.
//!
//! # Files and Folders
//!
//! Only the last segment is examined. It is a file name when it has an
//! extension that is alphabetic, or short (at most five characters) and not
//! purely numeric. See [`is_file_name`].
//!
//! # Examples
//!
//! ```
//! use pathcat::path::{classify, ClassifyOptions};
//!
//! let options = ClassifyOptions::default();
//! let entry = classify(r"C:\Users\bob\file.txt", &options).unwrap();
//!
//! assert_eq!(entry.drive(), "C:");
//! assert_eq!(entry.folders(), ["Users", "bob"]);
//! assert_eq!(entry.file_name(), Some("file.txt"));
//! assert_eq!(entry.folder_path(), r"C:\Users\bob\file.txt");
//! ```

mod classify;
pub mod drive;
mod entry;
pub mod extension;
pub mod segments;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use classify::{classify, ClassifyOptions, DEFAULT_NO_DRIVE_LABEL, DEFAULT_SEPARATOR};
pub use drive::split_drive;
pub use entry::PathEntry;
pub use extension::{extension, is_file_name};
pub use segments::split_segments;
