//! Utility functions for CLI operations.

use crate::error::CliError;
use crumbs::{Config, ConfigBuilder};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed when installing the logger
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Configuration file applied on top of the discovered ones.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line overrides (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Discovered configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(overrides);

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(CliError::from)
}
