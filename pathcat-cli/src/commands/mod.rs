//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `process`: Classify a path listing and export the table
//! - `classify`: Classify individual paths
//! - `detect`: Show the encoding a listing would be decoded with
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod classify;
pub mod completions;
pub mod detect;
pub mod process;
pub mod validate;

pub use classify::ClassifyCommand;
pub use completions::CompletionsCommand;
pub use detect::DetectCommand;
pub use process::ProcessCommand;
pub use validate::ValidateCommand;
