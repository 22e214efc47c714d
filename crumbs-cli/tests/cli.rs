//! Integration tests for the crumbs CLI.
//!
//! These tests verify argument parsing, help text, and version output.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_cli_no_arguments() {
    let env = TestEnv::new();

    env.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let env = TestEnv::new();

    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("crumbs"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    let env = TestEnv::new();

    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("breadcrumb"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("show-config"));
}

#[test]
fn test_resolve_help_lists_flags() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--origin"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--root-policy"));
}

#[test]
fn test_invalid_subcommand() {
    let env = TestEnv::new();

    env.command()
        .arg("crumble")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_invalid_format_value() {
    let env = TestEnv::new();

    env.resolve("/a", &["--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crumbs"))
        .stdout(predicate::str::contains("resolve"));
}
