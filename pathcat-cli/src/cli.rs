//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ClassifyCommand, CompletionsCommand, DetectCommand, ProcessCommand, ValidateCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use pathcat::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for turning path listings into folder-level tables.
#[derive(Parser)]
#[command(name = "pathcat")]
#[command(version, about = "Turn path listings into folder-level tables", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "PATHCAT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify a path listing and export it as a table
    Process(ProcessCommand),

    /// Classify individual paths
    Classify(ClassifyCommand),

    /// Show which encoding would be used for a listing
    Detect(DetectCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// Table output format accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
    /// JSON with columns and rows
    Json,
    /// Aligned, human-readable table
    Table,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Self::Csv,
            FormatArg::Tsv => Self::Tsv,
            FormatArg::Json => Self::Json,
            FormatArg::Table => Self::Table,
        }
    }
}
