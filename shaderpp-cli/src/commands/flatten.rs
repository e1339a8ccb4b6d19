//! Command to expand a shader file into one flattened source.

use crate::error::CliError;
use crate::utils::{build_preprocessor, GlobalOptions};
use clap::Args;
use shaderpp::init_logger;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Expand a shader file, inlining every include.
#[derive(Args)]
pub struct FlattenCommand {
    /// Root shader file to expand
    pub file: PathBuf,

    /// Write the flattened source here instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl FlattenCommand {
    /// Execute the flatten command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = init_logger(global.verbose, global.quiet);
        let pp = build_preprocessor(global, &logger)?;

        logger.info(&format!("flattening {}", self.file.display()));
        let flattened = pp.parse(&self.file)?;

        match self.output {
            Some(path) => {
                fs::write(&path, flattened)?;
                logger.info(&format!("wrote {}", path.display()));
            }
            None => {
                io::stdout().write_all(flattened.as_bytes())?;
            }
        }
        Ok(())
    }
}
