//! Configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::preprocessor::DEFAULT_MAX_DEPTH;

/// Preprocessor configuration.
///
/// Every field is optional; `None` means "not set at this layer" so that
/// sources can be merged by precedence. Use the `effective_*` accessors to
/// read a merged config with defaults applied.
///
/// On disk this is a YAML document:
///
/// ```yaml
/// include_paths:
///   - assets/shaders
///   - vendor/shaders
/// max_depth: 32
/// cache: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Fallback directories for include resolution, in priority order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_paths: Option<Vec<PathBuf>>,

    /// Cap on include nesting depth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Whether to enable the modification-time-keyed source cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
}

impl Config {
    /// Merges another config over this one.
    ///
    /// Fields set in `higher` win; `include_paths` is replaced wholesale
    /// rather than concatenated, so a project file can fully redefine the
    /// search list a user file established.
    #[must_use]
    pub fn merged_with(self, higher: Config) -> Config {
        Config {
            include_paths: higher.include_paths.or(self.include_paths),
            max_depth: higher.max_depth.or(self.max_depth),
            cache: higher.cache.or(self.cache),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `max_depth` is zero. Include paths
    /// are not required to exist; non-existent directories simply never
    /// match during resolution.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(Error::Validation {
                field: "max_depth".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// The include nesting cap with the default applied.
    #[must_use]
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// The search-path list with the default (empty) applied.
    #[must_use]
    pub fn effective_include_paths(&self) -> &[PathBuf] {
        self.include_paths.as_deref().unwrap_or(&[])
    }

    /// Whether caching is enabled (off by default).
    #[must_use]
    pub fn cache_enabled(&self) -> bool {
        self.cache.unwrap_or(false)
    }
}
