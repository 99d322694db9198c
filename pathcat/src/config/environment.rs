//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHCAT_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;

/// `PATHCAT_FILTER_FILES`
pub const FILTER_FILES_ENV: &str = "PATHCAT_FILTER_FILES";
/// `PATHCAT_ENCODING`
pub const ENCODING_ENV: &str = "PATHCAT_ENCODING";
/// `PATHCAT_FALLBACK_ENCODING`
pub const FALLBACK_ENCODING_ENV: &str = "PATHCAT_FALLBACK_ENCODING";
/// `PATHCAT_SEPARATOR`
pub const SEPARATOR_ENV: &str = "PATHCAT_SEPARATOR";
/// `PATHCAT_NO_DRIVE_LABEL`
pub const NO_DRIVE_LABEL_ENV: &str = "PATHCAT_NO_DRIVE_LABEL";
/// `PATHCAT_OUTPUT_FORMAT`
pub const OUTPUT_FORMAT_ENV: &str = "PATHCAT_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathcat::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Unset variables leave the corresponding field untouched. String
    /// values are taken as-is and checked later by the validator.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean or output format value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(FILTER_FILES_ENV) {
            config.filter_files = Some(Self::parse_bool(FILTER_FILES_ENV, &val)?);
        }

        if let Ok(encoding) = env::var(ENCODING_ENV) {
            config.encoding = Some(encoding);
        }

        if let Ok(encoding) = env::var(FALLBACK_ENCODING_ENV) {
            config.fallback_encoding = Some(encoding);
        }

        if let Ok(separator) = env::var(SEPARATOR_ENV) {
            config.separator = Some(separator);
        }

        if let Ok(label) = env::var(NO_DRIVE_LABEL_ENV) {
            config.no_drive_label = Some(label);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(OutputFormat::parse(&format).map_err(|_| {
                Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message: format!("Invalid output format: '{format}'"),
                }
            })?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
