//! The classified form of one input line.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One classified path.
///
/// The segments are stored once; [`folders`](Self::folders) and
/// [`file_name`](Self::file_name) are views over them, so a file name is
/// present exactly when [`is_file`](Self::is_file) is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    drive: String,
    segments: Vec<String>,
    is_file: bool,
    folder_path: String,
}

impl PathEntry {
    /// Build an entry from already-split parts.
    ///
    /// `segments` must be non-empty; [`classify`](super::classify) never
    /// calls this otherwise.
    pub(crate) fn new(drive: String, segments: Vec<String>, is_file: bool, separator: char) -> Self {
        debug_assert!(!segments.is_empty());
        let mut entry = Self {
            drive,
            segments,
            is_file,
            folder_path: String::new(),
        };
        entry.folder_path = entry.join_path(separator);
        entry
    }

    /// The drive token, or the no-drive label.
    #[must_use]
    pub fn drive(&self) -> &str {
        &self.drive
    }

    /// All non-empty segments after the drive, in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the last segment was classified as a file name.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        self.is_file
    }

    /// The trailing file name, present iff [`is_file`](Self::is_file).
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        if self.is_file {
            self.segments.last().map(String::as_str)
        } else {
            None
        }
    }

    /// Folder segments: every segment except a trailing file name.
    #[must_use]
    pub fn folders(&self) -> &[String] {
        if self.is_file {
            &self.segments[..self.segments.len() - 1]
        } else {
            &self.segments
        }
    }

    /// Folder depth (number of folder segments).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.folders().len()
    }

    /// Drive, folders and file name joined by the canonical separator.
    #[must_use]
    pub fn folder_path(&self) -> &str {
        &self.folder_path
    }

    fn join_path(&self, separator: char) -> String {
        let mut path = self.drive.clone();
        let tail = self.folders().iter().map(String::as_str).chain(self.file_name());
        for part in tail {
            path.push(separator);
            path.push_str(part);
        }
        path
    }
}

impl Serialize for PathEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PathEntry", 6)?;
        state.serialize_field("drive", &self.drive)?;
        state.serialize_field("segments", &self.segments)?;
        state.serialize_field("is_file", &self.is_file)?;
        state.serialize_field("file_name", &self.file_name())?;
        state.serialize_field("folders", self.folders())?;
        state.serialize_field("folder_path", &self.folder_path)?;
        state.end()
    }
}
