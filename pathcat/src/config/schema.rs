//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered on top of
//! each other; unset fields fall back to the built-in defaults when the
//! configuration is turned into [`ProcessOptions`].

use serde::{Deserialize, Serialize};

use crate::decode::lookup_encoding;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::path::{ClassifyOptions, DEFAULT_NO_DRIVE_LABEL, DEFAULT_SEPARATOR};
use crate::pipeline::ProcessOptions;

/// Default fallback encoding label.
pub const DEFAULT_FALLBACK_ENCODING: &str = "utf-8";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathcat::config::Config;
///
/// let config: Config = serde_yaml::from_str("filter_files: true\nseparator: /\n").unwrap();
/// assert_eq!(config.filter_files, Some(true));
///
/// let options = config.process_options().unwrap();
/// assert!(options.classify.filter_files);
/// assert_eq!(options.classify.separator, '/');
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Keep only lines whose last segment looks like a file.
    pub filter_files: Option<bool>,

    /// Decode input with this encoding instead of detecting one.
    pub encoding: Option<String>,

    /// Encoding used when detection has no answer.
    pub fallback_encoding: Option<String>,

    /// Separator for the `Folder Path` column, `\` or `/`.
    pub separator: Option<String>,

    /// Drive column value for lines without a drive.
    pub no_drive_label: Option<String>,

    /// Default output format for exported tables.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Resolve this configuration into processing options.
    ///
    /// # Errors
    ///
    /// Returns an error if an encoding label is unknown or the separator is
    /// not a single `\` or `/`.
    pub fn process_options(&self) -> Result<ProcessOptions> {
        let encoding = self.encoding.as_deref().map(lookup_encoding).transpose()?;
        let fallback_encoding =
            lookup_encoding(self.fallback_encoding.as_deref().unwrap_or(DEFAULT_FALLBACK_ENCODING))?;
        let separator = match self.separator.as_deref() {
            Some(value) => parse_separator(value)?,
            None => DEFAULT_SEPARATOR,
        };

        Ok(ProcessOptions {
            classify: ClassifyOptions {
                filter_files: self.filter_files.unwrap_or(false),
                separator,
                no_drive_label: self
                    .no_drive_label
                    .clone()
                    .unwrap_or_else(|| DEFAULT_NO_DRIVE_LABEL.to_string()),
            },
            encoding,
            fallback_encoding,
        })
    }

    /// The configured output format, or the default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Parse a `Folder Path` separator.
///
/// # Errors
///
/// Returns a validation error unless `value` is exactly `\` or `/`.
pub fn parse_separator(value: &str) -> Result<char> {
    match value {
        "\\" => Ok('\\'),
        "/" => Ok('/'),
        _ => Err(Error::Validation {
            field: "separator".into(),
            message: format!("must be '\\' or '/', got '{value}'"),
        }),
    }
}
