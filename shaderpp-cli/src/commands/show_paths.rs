//! Command to show the effective include search paths.

use crate::error::CliError;
use crate::utils::{build_preprocessor, GlobalOptions};
use clap::Args;
use shaderpp::init_logger;

/// Print the merged search-path list, one directory per line, in the
/// order resolution consults them.
#[derive(Args)]
pub struct ShowPathsCommand {}

impl ShowPathsCommand {
    /// Execute the show-paths command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = init_logger(global.verbose, global.quiet);
        let pp = build_preprocessor(global, &logger)?;

        for dir in pp.search_paths().iter() {
            println!("{}", dir.display());
        }
        Ok(())
    }
}
