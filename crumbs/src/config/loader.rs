//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading crumbs configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "crumbs.yaml";

/// Name of the user configuration file inside the user config directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use crumbs::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.crumbs/config.yaml` (precedence 1)
    /// 2. The nearest `crumbs.yaml` walking up from `working_dir` (precedence 2)
    /// 3. `explicit_file`, if given (precedence 3)
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed, or if `explicit_file` does not exist.
    pub fn load_all(working_dir: &Path, explicit_file: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config()? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        if let Some(path) = explicit_file {
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 3,
                config: Self::load_file(path)?,
            });
        }

        // Sort by precedence (higher precedence last for easier processing)
        sources.sort_by_key(|s| s.precedence);

        for source in &sources {
            log::debug!(
                "loaded configuration from {} (precedence {})",
                source.path.display(),
                source.precedence
            );
        }

        Ok(sources)
    }

    /// Load the user configuration file, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load_user_config() -> Result<Option<ConfigSource>> {
        let Some(config_path) = Self::user_config_path() else {
            return Ok(None);
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1, // Lowest precedence
            config,
        }))
    }

    /// Find the nearest project configuration by walking up directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is a valid, empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Path of the user configuration file, `~/.crumbs/config.yaml`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".crumbs").join(USER_CONFIG_FILE))
    }
}
