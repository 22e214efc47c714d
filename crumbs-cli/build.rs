//! Build script for crumbs-cli.
//!
//! Generates the `crumbs.1` man page into OUT_DIR with clap_mangen. The
//! command tree is declared here because a build script cannot depend on the
//! crate it builds; keep it in sync with src/cli.rs.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("crumbs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render breadcrumb trails and BreadcrumbList structured data")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file applied on top of discovered ones")
                .value_name("FILE")
                .global(true)
                .env("CRUMBS_CONFIG"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve a path or URL into a breadcrumb trail")
                .long_about(
                    "Resolve a root-relative path or absolute URL and print its trail as HTML, JSON-LD, JSON or text",
                ),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a crumbs configuration file for errors"),
            Command::new("show-config")
                .about("Show the effective configuration")
                .long_about("Print the configuration merged from files, environment and defaults"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("crumbs.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}
