//! Configuration builder.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Assembles the effective configuration from files, environment and
/// programmatic overrides, then validates it.
///
/// # Examples
///
/// ```
/// use crumbs::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         separator: Some("›".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.separator(), "›");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that loads files and environment variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project config discovery at `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load `path` on top of the discovered files.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Apply `config` with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `CRUMBS_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir().map_err(Error::Io)?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.config_file.as_deref())?;
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
