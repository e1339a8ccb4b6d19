//! Configuration system for shaderpp.
//!
//! Hierarchical configuration merged from multiple sources, with the
//! following precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via [`ConfigBuilder::with_config`])
//! 2. Environment variables (`SHADERPP_*`)
//! 3. Project config (`shaderpp.yaml`)
//! 4. User config (`~/.shaderpp/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use shaderpp::{ConfigBuilder, Preprocessor};
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let pp = Preprocessor::from_config(&config);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use schema::Config;
