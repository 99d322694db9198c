//! Configuration validation.
//!
//! Parsing only checks shapes; this module checks that values are usable,
//! so that a bad label in a config file is reported when the file is loaded
//! rather than halfway through processing.

use crate::config::schema::{parse_separator, Config};
use crate::decode::lookup_encoding;
use crate::error::{Error, Result};

/// Maximum length of the "no drive" label.
const MAX_LABEL_LEN: usize = 255;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathcat::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config {
///     separator: Some("|".into()),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: an unknown encoding label, a
    /// separator other than `\` or `/`, or an unusable "no drive" label.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref label) = config.encoding {
            Self::validate_encoding("encoding", label)?;
        }

        if let Some(ref label) = config.fallback_encoding {
            Self::validate_encoding("fallback_encoding", label)?;
        }

        if let Some(ref separator) = config.separator {
            parse_separator(separator)?;
        }

        if let Some(ref label) = config.no_drive_label {
            Self::validate_label("no_drive_label", label)?;
        }

        Ok(())
    }

    fn validate_encoding(field: &str, label: &str) -> Result<()> {
        lookup_encoding(label).map(|_| ()).map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Unknown encoding label '{label}'"),
        })
    }

    /// Checks that the label is non-empty after trimming, contains no
    /// control characters, and is not longer than 255 characters.
    fn validate_label(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.chars().any(char::is_control) {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain control characters".into(),
            });
        }

        if value.chars().count() > MAX_LABEL_LEN {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Cannot exceed {MAX_LABEL_LEN} characters"),
            });
        }

        Ok(())
    }
}
