//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ResolveCommand, ShowConfigCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for rendering breadcrumb trails.
#[derive(Parser)]
#[command(name = "crumbs")]
#[command(version, about = "Render breadcrumb trails and BreadcrumbList structured data", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file applied on top of discovered ones
    #[arg(long, value_name = "FILE", global = true, env = "CRUMBS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a path or URL into a breadcrumb trail
    Resolve(ResolveCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Show the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
