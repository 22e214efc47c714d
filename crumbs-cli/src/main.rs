//! Main entry point for the crumbs CLI.
//!
//! It provides commands for working with breadcrumb trails:
//! - `resolve`: Resolve a path or URL and render its trail
//! - `validate`: Validate a configuration file
//! - `show-config`: Print the effective configuration
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = crumbs::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
