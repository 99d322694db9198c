//! Output formatting module for path tables.
//!
//! This module serializes a [`Table`] for export. CSV is the default since
//! every spreadsheet application opens it; TSV, JSON and an aligned
//! human-readable table are also available.
//!
//! Empty cells are written as empty fields (CSV, TSV), `null` (JSON), or `-`
//! (human-readable table).

mod formatters;

use std::fmt;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::table::Table;
use crate::{Error, Result};

pub use formatters::{DelimitedFormatter, HumanFormatter, JsonFormatter};

/// Trait for writing a table in some output format.
pub trait TableFormatter {
    /// Write `table` to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying write fails.
    fn write_table(&self, table: &Table, out: &mut dyn Write) -> Result<()>;

    /// Render `table` into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, table: &Table) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_table(table, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::Export {
            format: "text".to_string(),
            reason: e.to_string(),
        })
    }
}

/// Available output formats for tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values.
    #[default]
    Csv,
    /// Tab-separated values.
    Tsv,
    /// JSON object with `columns` and `rows`.
    Json,
    /// Aligned, human-readable table.
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown names.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcat::output::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::parse("TSV").unwrap(), OutputFormat::Tsv);
    /// assert!(OutputFormat::parse("xlsx").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            _ => Err(Error::Validation {
                field: "output_format".to_string(),
                message: format!("unknown output format '{s}' (expected csv, tsv, json, table)"),
            }),
        }
    }

    /// Guess the format from a file extension, e.g. `paths.tsv`.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            "json" => Some(Self::Json),
            "txt" => Some(Self::Table),
            _ => None,
        }
    }

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn TableFormatter> {
        match self {
            Self::Csv => Box::new(DelimitedFormatter::csv()),
            Self::Tsv => Box::new(DelimitedFormatter::tsv()),
            Self::Json => Box::new(JsonFormatter),
            Self::Table => Box::new(HumanFormatter),
        }
    }
}
