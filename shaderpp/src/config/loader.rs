//! Configuration file discovery and loading.
//!
//! Two file sources are recognized, loaded lowest precedence first:
//!
//! 1. User config at `~/.shaderpp/config.yaml`
//! 2. Project config `shaderpp.yaml`, found by walking up from the working
//!    directory and stopping at the first directory that has one

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// A loaded configuration file with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path the configuration was loaded from.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Discovers and loads configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files, sorted by ascending
    /// precedence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a discovered file cannot be read or
    /// parsed. Missing files are not errors; they are simply absent from
    /// the result.
    pub fn load_all(working_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user) = Self::load_user_config()? {
            sources.push(user);
        }
        if let Some(project) = Self::discover_project_config(working_dir)? {
            sources.push(project);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load the user configuration at `~/.shaderpp/config.yaml`, if any.
    fn load_user_config() -> Result<Option<ConfigSource>> {
        let Some(home) = home::home_dir() else {
            return Ok(None);
        };
        let path = home.join(".shaderpp").join("config.yaml");
        if !path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence: 1,
            config,
        }))
    }

    /// Walk up from `start_dir` looking for `shaderpp.yaml`.
    ///
    /// Stops at the first directory that has one, so nested projects see
    /// their own file rather than an ancestor's.
    fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = Some(start_dir);
        while let Some(dir) = current {
            let candidate = dir.join("shaderpp.yaml");
            if candidate.exists() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }
            current = dir.parent();
        }
        Ok(None)
    }

    /// Read and parse one configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] carrying the file path and the underlying
    /// read or parse failure.
    pub fn load_file(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
