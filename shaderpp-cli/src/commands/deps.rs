//! Command to list every file a shader transitively includes.
//!
//! Useful for build systems that need to re-run flattening when any
//! included file changes.

use crate::error::CliError;
use crate::utils::{build_preprocessor, GlobalOptions};
use clap::{Args, ValueEnum};
use serde::Serialize;
use shaderpp::init_logger;
use std::path::PathBuf;

/// Output format for the deps command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One resolved path per line
    Text,
    /// JSON object with root and dependency list
    Json,
}

#[derive(Serialize)]
struct DepsReport<'a> {
    root: &'a PathBuf,
    dependencies: &'a [PathBuf],
}

/// List every file the root transitively includes, in first-use order.
#[derive(Args)]
pub struct DepsCommand {
    /// Root shader file to analyze
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl DepsCommand {
    /// Execute the deps command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = init_logger(global.verbose, global.quiet);
        let pp = build_preprocessor(global, &logger)?;

        let deps = pp.dependencies(&self.file)?;

        match self.format {
            OutputFormat::Text => {
                for dep in &deps {
                    println!("{}", dep.display());
                }
            }
            OutputFormat::Json => {
                let report = DepsReport {
                    root: &self.file,
                    dependencies: &deps,
                };
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }
        Ok(())
    }
}
