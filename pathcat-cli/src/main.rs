//! Main entry point for the pathcat CLI.
//!
//! This is the command-line interface for pathcat. It provides commands for
//! working with path listings:
//! - `process`: Classify a listing and export it as a table
//! - `classify`: Classify individual paths
//! - `detect`: Show the encoding a listing would be decoded with
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    pathcat::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Process(cmd) => cmd.execute(&global),
        cli::Command::Classify(cmd) => cmd.execute(&global),
        cli::Command::Detect(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
