//! Command to validate a pathcat configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathcat::config::{Config, ConfigValidator};
use std::path::PathBuf;

/// Validate a pathcat configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Parse the file; an empty file is an empty configuration
        let contents = std::fs::read_to_string(&self.config_path)?;
        let config: Config = if contents.trim().is_empty() {
            Config::default()
        } else {
            match serde_yaml::from_str(&contents) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Parse error: {e}");
                    return Err(CliError::SemanticFailure(
                        "Configuration file is invalid".to_string(),
                    ));
                }
            }
        };

        // 3. Check the values
        match ConfigValidator::validate(&config) {
            Ok(()) => {
                if !global.quiet {
                    println!("Configuration is valid");
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
