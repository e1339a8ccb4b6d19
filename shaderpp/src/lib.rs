#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # shaderpp
//!
//! A library for resolving `#include` directives in shader sources.
//!
//! GLSL and friends have no include mechanism of their own, so shader
//! codebases grow ad-hoc ones. This crate implements the common textual
//! convention: a [`Preprocessor`] takes a root file path and returns one
//! flattened source string with every `#include "..."` / `#include <...>`
//! directive recursively replaced by the referenced file's contents. After
//! each inlined block a `#line <N>` marker restores line-number context, so
//! compiler diagnostics on the flattened text still point at the original
//! sources.
//!
//! ## Core Types
//!
//! - [`Preprocessor`]: recursive include expansion with cycle detection
//! - [`SearchPaths`]: ordered fallback directories for include resolution
//! - [`SourceCache`]: optional mtime-keyed content cache
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use shaderpp::Preprocessor;
//!
//! let pp = Preprocessor::new().with_search_path("assets/shaders");
//! let flattened = pp.parse("assets/shaders/main.glsl")?;
//! # Ok::<(), shaderpp::Error>(())
//! ```

pub mod cache;
pub mod config;
pub mod directive;
pub mod error;
pub mod logging;
pub mod preprocessor;
pub mod search;

// Re-export key types at crate root for convenience
pub use cache::SourceCache;
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use preprocessor::{Preprocessor, DEFAULT_MAX_DEPTH};
pub use search::SearchPaths;
