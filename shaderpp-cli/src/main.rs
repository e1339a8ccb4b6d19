//! Main entry point for the shaderpp CLI.
//!
//! This is the command-line interface for the shaderpp include resolver.
//! It provides commands for working with shader source trees:
//! - `flatten`: expand a shader file into one flattened source
//! - `deps`: list every file a shader transitively includes
//! - `check`: verify that shader files preprocess cleanly
//! - `show-paths`: show the effective include search paths

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = shaderpp::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        include_paths: cli.include_path,
        config: cli.config,
        no_config: cli.no_config,
        max_depth: cli.max_depth,
        cache: cli.cache,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Flatten(cmd) => cmd.execute(&global),
        cli::Command::Deps(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::ShowPaths(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
