//! Process command implementation.
//!
//! This module implements the `process` command, which decodes a path
//! listing, classifies every line and writes the resulting table.

use crate::cli::FormatArg;
use crate::error::CliError;
use crate::utils::{load_configuration, read_input, write_table, GlobalOptions};
use clap::Args;
use pathcat::{process, ChardetDetector, Config, OutputFormat};
use std::path::PathBuf;

/// Classify a path listing and export it as a table.
#[derive(Args)]
pub struct ProcessCommand {
    /// Path listing to read, one path per line (`-` for stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Keep only lines that end in a file name
    #[arg(long)]
    pub filter_files: bool,

    /// Decode with this encoding instead of detecting it
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Output format [default: from --output extension, config, or csv]
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,

    /// Write the table to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Separator for the Folder Path column (`\` or `/`)
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,
}

impl ProcessCommand {
    /// Execute the process command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration with flags on top
        let overrides = Config {
            filter_files: self.filter_files.then_some(true),
            encoding: self.encoding.clone(),
            separator: self.separator.clone(),
            ..Default::default()
        };
        let config = load_configuration(global, overrides)?;
        let options = config.process_options()?;

        // 2. Run the pipeline
        let bytes = read_input(&self.input)?;
        let processed = process(&bytes, &options, &ChardetDetector::default());
        if let Some(err) = processed.decode_error {
            return Err(CliError::from(err));
        }

        if global.verbose {
            eprintln!(
                "{} line(s), {} row(s), {} skipped, {} folder level(s)",
                processed.lines,
                processed.table.len(),
                processed.skipped,
                processed.table.depth()
            );
        }

        // 3. Write the table
        let format = self.resolve_format(&config);
        let formatter = format.create_formatter();
        match self.output {
            Some(ref path) if processed.table.is_empty() => {
                if !global.quiet {
                    eprintln!("No paths found; {} was not written", path.display());
                }
            }
            Some(ref path) => {
                write_table(formatter.as_ref(), &processed.table, Some(path))?;
                if !global.quiet {
                    eprintln!(
                        "Wrote {} row(s) to {} ({format})",
                        processed.table.len(),
                        path.display()
                    );
                }
            }
            None => write_table(formatter.as_ref(), &processed.table, None)?,
        }

        Ok(())
    }

    /// The explicit flag wins, then the output file's extension, then the
    /// configured format.
    fn resolve_format(&self, config: &Config) -> OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(OutputFormat::from_path)
            .unwrap_or_else(|| config.output_format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(format: Option<FormatArg>, output: Option<&str>) -> ProcessCommand {
        ProcessCommand {
            input: PathBuf::from("listing.txt"),
            filter_files: false,
            encoding: None,
            format,
            output: output.map(PathBuf::from),
            separator: None,
        }
    }

    #[test]
    fn test_resolve_format_flag_wins() {
        let config = Config {
            output_format: Some(OutputFormat::Tsv),
            ..Default::default()
        };
        let cmd = command(Some(FormatArg::Json), Some("out.csv"));
        assert_eq!(cmd.resolve_format(&config), OutputFormat::Json);
    }

    #[test]
    fn test_resolve_format_from_extension() {
        let config = Config {
            output_format: Some(OutputFormat::Tsv),
            ..Default::default()
        };
        assert_eq!(
            command(None, Some("out.json")).resolve_format(&config),
            OutputFormat::Json
        );
        assert_eq!(
            command(None, Some("out.xlsx")).resolve_format(&config),
            OutputFormat::Tsv
        );
    }

    #[test]
    fn test_resolve_format_default() {
        assert_eq!(
            command(None, None).resolve_format(&Config::default()),
            OutputFormat::Csv
        );
    }
}
