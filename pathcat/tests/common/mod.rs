//! Common test utilities for integration tests.
//!
//! This module provides helpers for writing path listings to disk and for
//! looking at tables cell by cell.

use std::fs;
use std::path::{Path, PathBuf};

use pathcat::Table;

/// Creates a temporary directory for testing.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Write `lines` joined by `terminator` to `dir/name`.
#[allow(dead_code)]
pub fn write_listing(dir: &Path, name: &str, lines: &[&str], terminator: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join(terminator)).unwrap();
    path
}

/// Write raw bytes to `dir/name`.
#[allow(dead_code)]
pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

/// A column of the table as plain options, for compact assertions.
#[allow(dead_code)]
pub fn column(table: &Table, name: &str) -> Vec<Option<String>> {
    let index = table
        .columns()
        .iter()
        .position(|c| c == name)
        .unwrap_or_else(|| panic!("no column {name} in {:?}", table.columns()));
    table
        .rows()
        .iter()
        .map(|row| row.get(index).map(str::to_string))
        .collect()
}

/// A listing of realistic Windows paths with varying depth.
#[allow(dead_code)]
pub fn sample_listing() -> Vec<&'static str> {
    vec![
        r"C:\Users\bob\file.txt",
        r"C:\Users\bob\Documents",
        r"C:\Users\bob\Documents\Reports\2023\summary.docx",
        "",
        r"D:\Backup\backup.123",
        r"D:\Backup\archive.v2",
        r"\\server\share\notes",
        r"C:\",
        "   ",
        "relative/dir/readme.md",
    ]
}
