//! Build script for shaderpp-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("shaderpp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Flatten #include directives in shader sources")
        .long_about(
            "Command-line tool for recursively expanding #include directives in shader sources",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("include-path")
                .short('I')
                .long("include-path")
                .help("Add an include search directory")
                .value_name("DIR")
                .global(true)
                .action(clap::ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load exactly this configuration file instead of discovering one")
                .value_name("FILE")
                .global(true)
                .env("SHADERPP_CONFIG"),
        )
        .arg(
            Arg::new("no-config")
                .long("no-config")
                .help("Skip configuration file discovery entirely")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .help("Override the include nesting cap")
                .value_name("N")
                .global(true),
        )
        .arg(
            Arg::new("cache")
                .long("cache")
                .help("Enable the modification-time-keyed source cache")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("flatten")
                .about("Expand a shader file into one flattened source")
                .arg(Arg::new("file").help("Root shader file to expand").required(true))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the flattened source here instead of stdout")
                        .value_name("FILE"),
                ),
        )
        .subcommand(
            Command::new("deps")
                .about("List every file a shader transitively includes")
                .arg(Arg::new("file").help("Root shader file to analyze").required(true))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format")
                        .value_name("FORMAT"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Verify that shader files preprocess cleanly")
                .arg(
                    Arg::new("files")
                        .help("Shader files to check")
                        .required(true)
                        .action(clap::ArgAction::Append),
                ),
        )
        .subcommand(Command::new("show-paths").about("Show the effective include search paths"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(Arg::new("shell").help("Shell to generate completions for").required(true)),
        )
}

fn main() {
    let out_dir = match std::env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();
    if man.render(&mut buffer).is_ok() {
        let _ = fs::write(out_dir.join("shaderpp.1"), buffer);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
