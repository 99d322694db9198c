//! Build script for pathcat-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here by hand.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    let format_values = ["csv", "tsv", "json", "table"];

    Command::new("pathcat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn path listings into folder-level tables")
        .long_about(
            "Classify a listing of file system paths, one per line, into drive, \
             folder levels and file name, and export the result as a table",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("PATHCAT_DATA_DIR"),
        )
        .subcommands(vec![
            Command::new("process")
                .about("Classify a path listing and export it as a table")
                .arg(Arg::new("input").value_name("INPUT").required(true))
                .arg(
                    Arg::new("filter-files")
                        .long("filter-files")
                        .help("Keep only lines that end in a file name")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("encoding")
                        .long("encoding")
                        .value_name("LABEL")
                        .help("Decode with this encoding instead of detecting it"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(format_values)
                        .help("Output format"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("Write the table to a file instead of stdout"),
                )
                .arg(
                    Arg::new("separator")
                        .long("separator")
                        .value_name("SEP")
                        .help("Separator for the Folder Path column"),
                ),
            Command::new("classify")
                .about("Classify individual paths")
                .arg(Arg::new("paths").value_name("PATH").num_args(1..).required(true)),
            Command::new("detect")
                .about("Show which encoding would be used for a listing")
                .arg(Arg::new("input").value_name("INPUT").required(true)),
            Command::new("validate")
                .about("Validate a configuration file")
                .arg(Arg::new("config").value_name("CONFIG_PATH").required(true)),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathcat.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
