//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, reading listings and writing tables.

use crate::error::CliError;
use pathcat::{Config, ConfigBuilder, Table, TableFormatter};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Input path meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (`overrides`, highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(overrides);
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Read a whole listing, from standard input when `path` is `-`.
pub fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    if path == Path::new(STDIN_PATH) {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        return Ok(bytes);
    }

    if !path.is_file() {
        return Err(CliError::InvalidArguments(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    Ok(fs::read(path)?)
}

/// Write `table` to `output`, or to stdout when `output` is `None`.
pub fn write_table(
    formatter: &dyn TableFormatter,
    table: &Table,
    output: Option<&Path>,
) -> Result<(), CliError> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            formatter.write_table(table, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            formatter.write_table(table, &mut handle)?;
            handle.flush()?;
        }
    }
    Ok(())
}
