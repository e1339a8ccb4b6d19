//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, DepsCommand, FlattenCommand, ShowPathsCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for flattening #include directives in shader sources.
#[derive(Parser)]
#[command(name = "shaderpp")]
#[command(version, about = "Flatten #include directives in shader sources", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Add an include search directory (repeatable, highest priority last)
    #[arg(short = 'I', long = "include-path", value_name = "DIR", global = true)]
    pub include_path: Vec<PathBuf>,

    /// Load exactly this configuration file instead of discovering one
    #[arg(long, value_name = "FILE", global = true, env = "SHADERPP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip configuration file discovery entirely
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Override the include nesting cap
    #[arg(long, value_name = "N", global = true)]
    pub max_depth: Option<usize>,

    /// Enable the modification-time-keyed source cache
    #[arg(long, global = true)]
    pub cache: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Expand a shader file into one flattened source
    Flatten(FlattenCommand),

    /// List every file a shader transitively includes
    Deps(DepsCommand),

    /// Verify that shader files preprocess cleanly
    Check(CheckCommand),

    /// Show the effective include search paths
    ShowPaths(ShowPathsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
