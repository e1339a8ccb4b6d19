//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated shader tree in a temporary directory plus a
//! command builder that keeps tests hermetic (no config discovery, no
//! ambient environment).

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated shader tree.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self { temp_dir, root }
    }

    /// Write a shader file from lines; intermediate directories are
    /// created as needed. Returns the absolute path.
    pub fn file(&self, relative: &str, lines: &[&str]) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&path, contents).expect("failed to write fixture file");
        path
    }

    /// Absolute path of a file in the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// A command builder pre-configured for hermetic runs: config
    /// discovery disabled and `SHADERPP_*` environment cleared.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--no-config");
        cmd
    }

    /// A command builder with a clean `SHADERPP_*` environment but no
    /// extra flags, for tests that exercise `--config` themselves.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("shaderpp").expect("failed to find shaderpp binary");
        cmd.env_remove("SHADERPP_CONFIG")
            .env_remove("SHADERPP_INCLUDE_PATH")
            .env_remove("SHADERPP_MAX_DEPTH")
            .env_remove("SHADERPP_CACHE")
            .env_remove("SHADERPP_LOG_MODE");
        cmd
    }
}
