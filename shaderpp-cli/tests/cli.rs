//! Integration tests for the shaderpp CLI surface.
//!
//! These tests verify that the binary behaves correctly at the argument
//! level: help text, version output, and unknown input handling.

mod common;

use common::TestEnv;
use predicates::prelude::*;

/// With subcommands required, no arguments fails and shows usage.
#[test]
fn test_cli_no_arguments() {
    let env = TestEnv::new();
    env.bare_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let env = TestEnv::new();
    env.bare_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shaderpp"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    let env = TestEnv::new();
    env.bare_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Flatten #include directives in shader sources",
        ));
}

#[test]
fn test_unknown_subcommand_fails() {
    let env = TestEnv::new();
    env.bare_cmd()
        .arg("explode")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_show_paths_lists_include_flags_in_order() {
    let env = TestEnv::new();
    let first = env.path("first");
    let second = env.path("second");
    std::fs::create_dir_all(&first).unwrap();
    std::fs::create_dir_all(&second).unwrap();

    let output = env
        .cmd()
        .arg("show-paths")
        .arg("-I")
        .arg(&first)
        .arg("-I")
        .arg(&second)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("first"));
    assert!(lines[1].ends_with("second"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.bare_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shaderpp"));
}
