//! Configuration system for crumbs.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `crumbs.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CRUMBS_*`)
//! 3. An explicit config file (via `ConfigBuilder::with_config_file`)
//! 4. The nearest project config (`crumbs.yaml`)
//! 5. User config (`~/.crumbs/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use crumbs::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/site"))
//!     .build()
//!     .unwrap();
//!
//! let trail = config.resolver().resolve("/blog/post");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
