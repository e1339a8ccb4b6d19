//! Configuration assembly with layered precedence.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;

/// Assembles a [`Config`] from its sources.
///
/// Precedence, lowest to highest:
///
/// 1. Built-in defaults
/// 2. User config (`~/.shaderpp/config.yaml`)
/// 3. Project config (`shaderpp.yaml`, discovered upward from the working
///    directory)
/// 4. `SHADERPP_*` environment variables
/// 5. Programmatic overrides via [`with_config`](ConfigBuilder::with_config)
///
/// # Examples
///
/// ```
/// use shaderpp::{Config, ConfigBuilder};
///
/// let overrides = Config {
///     max_depth: Some(16),
///     ..Default::default()
/// };
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(overrides)
///     .build()
///     .unwrap();
/// assert_eq!(config.max_depth, Some(16));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory project-config discovery starts from.
    ///
    /// Defaults to the process working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Loads exactly this file instead of discovering user and project
    /// configs.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Skips file-based sources entirely.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Sets programmatic overrides (highest precedence).
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Assembles and validates the configuration.
    ///
    /// # Errors
    ///
    /// Fails if a configuration file cannot be read or parsed, an
    /// environment variable does not parse, or the merged result fails
    /// validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(ref file) = self.config_file {
            config = config.merged_with(ConfigLoader::load_file(file)?);
        } else if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            };
            for source in ConfigLoader::load_all(&working_dir)? {
                config = config.merged_with(source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config = config.merged_with(overrides);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Convenience for "config discovered from this directory, no env".
///
/// Used by tests and simple embedders that want file-layering without
/// ambient environment influence.
pub fn load_from_dir(dir: &Path) -> Result<Config> {
    ConfigBuilder::new()
        .with_working_dir(dir)
        .skip_env()
        .build()
}
