//! Environment variable overrides for configuration.
//!
//! `SHADERPP_*` variables override file-based configuration:
//!
//! - `SHADERPP_INCLUDE_PATH`: search directories, separated by the
//!   platform's path-list separator (`:` on Unix, `;` on Windows)
//! - `SHADERPP_MAX_DEPTH`: include nesting cap
//! - `SHADERPP_CACHE`: `true`/`false`/`1`/`0`

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Applies `SHADERPP_*` environment overrides to a configuration.
///
/// # Examples
///
/// ```no_run
/// use shaderpp::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable is set to a value that
    /// does not parse (non-numeric depth, unrecognized boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(list) = env::var("SHADERPP_INCLUDE_PATH") {
            config.include_paths = Some(env::split_paths(&list).collect());
        }

        if let Ok(depth) = env::var("SHADERPP_MAX_DEPTH") {
            let depth = depth.parse().map_err(|_| Error::Validation {
                field: "SHADERPP_MAX_DEPTH".into(),
                message: format!("not a valid depth: {depth}"),
            })?;
            config.max_depth = Some(depth);
        }

        if let Ok(val) = env::var("SHADERPP_CACHE") {
            config.cache = Some(Self::parse_bool("SHADERPP_CACHE", &val)?);
        }

        Ok(())
    }

    fn parse_bool(field: &str, value: &str) -> Result<bool> {
        match value.to_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("not a valid boolean: {value}"),
            }),
        }
    }
}
