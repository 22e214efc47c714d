//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside its own temporary directory with `HOME`
//! pointed there too, so neither a user config nor a stray project
//! `crumbs.yaml` can leak into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CRUMBS_ENV_VARS: &[&str] = &[
    "CRUMBS_CONFIG",
    "CRUMBS_LOG_MODE",
    "CRUMBS_ORIGIN",
    "CRUMBS_SEPARATOR",
    "CRUMBS_ROOT_POLICY",
    "CRUMBS_OUTPUT_FORMAT",
    "CRUMBS_SCRIPT_TAG",
    "CRUMBS_PRETTY",
];

/// Isolated environment for running the `crumbs` binary.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// A `crumbs` command running in the temp directory with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("crumbs").expect("Failed to find crumbs binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in CRUMBS_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Shorthand for `crumbs resolve <target> <args...>`.
    pub fn resolve(&self, target: &str, args: &[&str]) -> Command {
        let mut cmd = self.command();
        cmd.arg("resolve").arg(target).args(args);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the temp directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Run a command and return its stdout as a string, asserting success.
    pub fn stdout_of(mut cmd: Command) -> String {
        let output = cmd.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("stdout is not UTF-8")
    }
}
