//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `flatten`: expand a shader file into one flattened source
//! - `deps`: list every file a shader transitively includes
//! - `check`: verify that shader files preprocess cleanly
//! - `show_paths`: show the effective include search paths
//! - `completions`: generate shell completions

pub mod check;
pub mod completions;
pub mod deps;
pub mod flatten;
pub mod show_paths;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use deps::DepsCommand;
pub use flatten::FlattenCommand;
pub use show_paths::ShowPathsCommand;
