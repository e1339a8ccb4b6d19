//! Common test utilities for preprocessor integration tests.
//!
//! Provides a fixture that materializes a shader tree in a temporary
//! directory and hands out paths into it.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A shader source tree rooted in a temporary directory.
///
/// Files are declared as `(relative path, lines)` pairs; intermediate
/// directories are created on demand. The temporary directory lives as
/// long as the fixture.
pub struct ShaderTree {
    /// Temporary directory (kept alive for the duration of the test).
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the root of the tree.
    pub root: PathBuf,
}

#[allow(dead_code)]
impl ShaderTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self { temp_dir, root }
    }

    /// Writes a file from a list of lines (a trailing newline is added).
    ///
    /// Returns the absolute path of the written file.
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

    /// Creates a subdirectory and returns its absolute path.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).expect("failed to create dir");
        path
    }

    /// Absolute path of a file in the tree (whether or not it exists).
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

/// Splits preprocessor output into lines, asserting the invariant that
/// every line (marker or literal) carries exactly one terminator.
#[allow(dead_code)]
pub fn output_lines(output: &str) -> Vec<&str> {
    assert!(
        output.is_empty() || output.ends_with('\n'),
        "output must end with a line terminator: {output:?}"
    );
    output.lines().collect()
}

#[allow(dead_code)]
pub fn assert_lines(output: &str, expected: &[&str]) {
    assert_eq!(output_lines(output), expected, "flattened output mismatch");
}

/// Path helper used in assertions against resolved dependency lists.
#[allow(dead_code)]
pub fn ends_with(path: &Path, suffix: &str) -> bool {
    path.ends_with(Path::new(suffix))
}
