//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "pathcat";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            self.print_instructions();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }

    /// Installation hints go to stderr so stdout stays a clean script.
    fn print_instructions(&self) {
        eprintln!("# Generating {} completion script", self.shell);
        match self.shell {
            Shell::Bash => {
                eprintln!("#   pathcat completions bash > ~/.local/share/bash-completion/completions/pathcat");
                eprintln!("# Or add to ~/.bashrc:");
                eprintln!("#   eval \"$(pathcat completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   pathcat completions zsh > ~/.zsh/completions/_pathcat");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                eprintln!("#   pathcat completions fish > ~/.config/fish/completions/pathcat.fish");
            }
            Shell::PowerShell => {
                eprintln!("#   pathcat completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }
        eprintln!();
    }
}
