//! Error types for the pathcat library.
//!
//! This module provides the error hierarchy for all operations in the
//! pathcat library, using `thiserror` for ergonomic error handling.
//!
//! Note that classification itself never fails: malformed lines are skipped,
//! not reported. Errors come from decoding, configuration, I/O and export.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathcat error.
///
/// # Examples
///
/// ```
/// use pathcat::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathcat library.
#[derive(Debug, Error)]
pub enum Error {
    /// The input bytes are not valid in the resolved encoding.
    #[error("failed to decode input with encoding {encoding}")]
    Decode {
        /// Name of the encoding that was tried.
        encoding: String,
    },

    /// An encoding label was not recognized.
    #[error("unknown encoding label '{label}'")]
    UnknownEncoding {
        /// The label as given.
        label: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Serializing a table failed.
    #[error("failed to export {format}: {reason}")]
    Export {
        /// The output format being written.
        format: String,
        /// The underlying failure.
        reason: String,
    },
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Export {
            format: "csv".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Export {
            format: "json".to_string(),
            reason: err.to_string(),
        }
    }
}

impl Error {
    /// Check if error is a decode failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcat::Error;
    ///
    /// let err = Error::Decode { encoding: "UTF-8".to_string() };
    /// assert!(err.is_decode_failure());
    /// ```
    #[must_use]
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Check if error indicates a missing file.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
