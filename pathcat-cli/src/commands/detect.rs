//! Command to show which encoding a listing would be decoded with.

use crate::error::CliError;
use crate::utils::{load_configuration, read_input, GlobalOptions};
use clap::Args;
use pathcat::decode::{decode, resolve};
use pathcat::{ChardetDetector, Config};
use std::path::PathBuf;

/// Show which encoding would be used for a listing.
#[derive(Args)]
pub struct DetectCommand {
    /// Path listing to inspect (`-` for stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

impl DetectCommand {
    /// Execute the detect command.
    ///
    /// Prints the encoding name on stdout. With `--verbose` the source of
    /// the decision is reported on stderr. Fails with the decode exit code
    /// if the listing is not valid in that encoding.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, Config::default())?;
        let options = config.process_options()?;

        let bytes = read_input(&self.input)?;
        let resolved = resolve(
            &bytes,
            options.encoding,
            &ChardetDetector::default(),
            options.fallback_encoding,
        );

        println!("{}", resolved.name());
        if global.verbose {
            eprintln!("Source: {}", resolved.source);
        }

        decode(&bytes, &resolved)?;
        Ok(())
    }
}
