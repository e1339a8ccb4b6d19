//! Utility functions for CLI operations.
//!
//! This module provides the glue between global CLI options and the
//! library: configuration loading and preprocessor construction.

use crate::error::CliError;
use shaderpp::{Config, ConfigBuilder, Logger, Preprocessor};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Extra include directories from `-I`, appended after config-derived
    /// paths.
    pub include_paths: Vec<PathBuf>,

    /// Explicit configuration file, if any.
    pub config: Option<PathBuf>,

    /// Skip configuration file discovery.
    pub no_config: bool,

    /// Include nesting cap override.
    pub max_depth: Option<usize>,

    /// Enable the source cache.
    pub cache: bool,
}

/// Load layered configuration, honoring the global options.
///
/// Flag-level overrides (`--max-depth`, `--cache`) take the highest
/// precedence, above files and environment.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref file) = global.config {
        builder = builder.with_config_file(file);
    } else if global.no_config {
        builder = builder.skip_files();
    }

    let overrides = Config {
        include_paths: None,
        max_depth: global.max_depth,
        cache: global.cache.then_some(true),
    };
    builder = builder.with_config(overrides);

    builder.build().map_err(CliError::from)
}

/// Build a preprocessor from merged configuration plus `-I` flags.
///
/// `-I` directories land after config-derived paths, so explicit flags
/// refine rather than replace a project's configured list. Missing search
/// directories are reported at verbose level; they are skipped during
/// resolution, never an error.
pub fn build_preprocessor(
    global: &GlobalOptions,
    logger: &Logger,
) -> Result<Preprocessor, CliError> {
    let config = load_configuration(global)?;
    let mut pp = Preprocessor::from_config(&config);
    for dir in &global.include_paths {
        pp.add_search_path(dir);
    }

    for dir in pp.search_paths().iter() {
        if !dir.is_dir() {
            logger.info(&format!("search path does not exist: {}", dir.display()));
        }
    }

    Ok(pp)
}
