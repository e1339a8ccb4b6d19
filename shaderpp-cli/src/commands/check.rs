//! Command to verify that shader files preprocess cleanly.

use crate::error::CliError;
use crate::utils::{build_preprocessor, GlobalOptions};
use clap::Args;
use shaderpp::init_logger;
use std::path::PathBuf;

/// Resolve every include in the given files without emitting output.
///
/// Reports each failure on stderr and exits non-zero if any file fails.
#[derive(Args)]
pub struct CheckCommand {
    /// Shader files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = init_logger(global.verbose, global.quiet);
        let pp = build_preprocessor(global, &logger)?;

        let mut failures = 0;
        for file in &self.files {
            match pp.parse(file) {
                Ok(_) => logger.info(&format!("ok: {}", file.display())),
                Err(err) => {
                    logger.error(&format!("{}: {err}", file.display()));
                    failures += 1;
                }
            }
        }

        if failures > 0 {
            return Err(CliError::CheckFailed { failures });
        }
        Ok(())
    }
}
