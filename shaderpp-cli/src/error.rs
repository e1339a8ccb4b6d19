//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer, wrapping
//! library errors and providing stable exit codes.

use shaderpp::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Preprocessing failure (cycle, depth, unresolved include, unreadable
    /// file).
    Preprocess(LibError),

    /// One or more files failed a `check` run.
    CheckFailed {
        /// Number of files that failed.
        failures: usize,
    },

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// Configuration error.
    Config(String),

    /// I/O error writing output.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Preprocessing failure
    /// - 2: Invalid arguments
    /// - 3: Configuration error
    /// - 4: I/O error writing output
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Preprocess(_) | CliError::CheckFailed { .. } => 1,
            CliError::InvalidArguments(_) => 2,
            CliError::Config(_) => 3,
            CliError::Io(_) => 4,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Preprocess(e) => write!(f, "{e}"),
            CliError::CheckFailed { failures } => {
                write!(f, "{failures} file(s) failed to preprocess")
            }
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<LibError> for CliError {
    fn from(err: LibError) -> Self {
        match err {
            LibError::Config { .. } | LibError::Validation { .. } => {
                CliError::Config(err.to_string())
            }
            other => CliError::Preprocess(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}
