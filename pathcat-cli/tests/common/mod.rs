//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated environment with its own working and data directories
//! - Command builders that ignore the caller's `PATHCAT_*` variables
//! - Listing fixtures

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads.
const PATHCAT_VARS: [&str; 8] = [
    "PATHCAT_FILTER_FILES",
    "PATHCAT_ENCODING",
    "PATHCAT_FALLBACK_ENCODING",
    "PATHCAT_SEPARATOR",
    "PATHCAT_NO_DRIVE_LABEL",
    "PATHCAT_OUTPUT_FORMAT",
    "PATHCAT_DATA_DIR",
    "PATHCAT_LOG_MODE",
];

/// Test environment with isolated directories.
///
/// Commands run with the temporary directory as their working directory,
/// so project config discovery only sees files the test writes there.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the pathcat data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("pathcat-data");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Command with only the binary, a clean environment and the temp
    /// directory as working directory.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathcat").expect("Failed to find pathcat binary");
        for var in PATHCAT_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Command with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temp directory and return its path.
    pub fn write_file(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write a listing with CRLF line endings.
    pub fn write_listing(&self, name: &str, lines: &[&str]) -> PathBuf {
        self.write_file(name, lines.join("\r\n"))
    }

    /// Write the user config in the data directory.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let path = self.data_dir.join("config.yaml");
        fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Run `process` on `input` with extra args and return stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn process_stdout(&self, input: &Path, args: &[&str]) -> String {
        let output = self
            .command()
            .arg("process")
            .arg(input)
            .args(args)
            .output()
            .expect("Failed to run process command");

        assert!(
            output.status.success(),
            "process failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

/// A short listing exercising drives, depth and the file heuristic.
#[allow(dead_code)]
pub fn sample_lines() -> Vec<&'static str> {
    vec![
        r"C:\Users\bob\file.txt",
        r"C:\Users\bob\Documents",
        "",
        r"D:\Backup\backup.123",
        r"D:\Backup\archive.v2",
        "/srv/www/index.html",
    ]
}
