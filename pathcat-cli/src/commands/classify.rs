//! Classify command implementation.
//!
//! Runs the classifier on paths given as arguments, which is handy for
//! checking how a particular line of a listing will be split.

use crate::error::CliError;
use crate::utils::{load_configuration, write_table, GlobalOptions};
use clap::{Args, ValueEnum};
use pathcat::output::HumanFormatter;
use pathcat::{classify, tabulate, Config, PathEntry};
use std::io::{self, Write};

/// Classify individual paths.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Paths to classify
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Skip paths that do not end in a file name
    #[arg(long)]
    pub filter_files: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: EntryFormat,
}

/// Output format for classified entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum EntryFormat {
    /// One row per path, aligned
    Table,
    /// JSON array of entries
    Json,
}

impl ClassifyCommand {
    /// Execute the classify command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(
            global,
            Config {
                filter_files: self.filter_files.then_some(true),
                ..Default::default()
            },
        )?;
        let options = config.process_options()?.classify;

        let mut entries: Vec<PathEntry> = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            match classify(path.trim(), &options) {
                Some(entry) => entries.push(entry),
                None if !global.quiet => eprintln!("Skipped: {path:?}"),
                None => {}
            }
        }

        match self.format {
            EntryFormat::Table => write_table(&HumanFormatter, &tabulate(&entries), None),
            EntryFormat::Json => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                serde_json::to_writer_pretty(&mut handle, &entries)
                    .map_err(|e| CliError::Library(e.into()))?;
                writeln!(handle)?;
                Ok(())
            }
        }
    }
}
