//! Library view of the pathcat command line.
//!
//! Exposes the clap definitions and command types so benches and tooling
//! can build and run commands without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::{Cli, Command, FormatArg};
pub use error::CliError;
pub use utils::GlobalOptions;
