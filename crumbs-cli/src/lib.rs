//! Library exports for crumbs-cli.
//!
//! This module exports the CLI structure for use by the completions
//! command and the integration tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-exported for shell completion generation
pub use cli::Cli;
