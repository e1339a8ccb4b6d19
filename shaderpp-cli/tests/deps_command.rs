//! Integration tests for the `deps` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_deps_text_first_use_order() {
    let env = TestEnv::new();
    env.file("d.glsl", &["shared"]);
    env.file("b.glsl", &["#include \"d.glsl\""]);
    env.file("c.glsl", &["#include \"d.glsl\""]);
    let root = env.file("a.glsl", &["#include \"b.glsl\"", "#include \"c.glsl\""]);

    let output = env.cmd().arg("deps").arg(&root).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "diamond dependency must be listed once");
    assert!(lines[0].ends_with("b.glsl"));
    assert!(lines[1].ends_with("d.glsl"));
    assert!(lines[2].ends_with("c.glsl"));
}

#[test]
fn test_deps_json_format() {
    let env = TestEnv::new();
    env.file("lib.glsl", &["c"]);
    let root = env.file("main.glsl", &["#include \"lib.glsl\""]);

    let output = env
        .cmd()
        .arg("deps")
        .arg(&root)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("deps --format json must emit JSON");
    assert!(parsed["root"].as_str().unwrap().ends_with("main.glsl"));
    let deps = parsed["dependencies"].as_array().unwrap();
    assert_eq!(deps.len(), 1);
    assert!(deps[0].as_str().unwrap().ends_with("lib.glsl"));
}

#[test]
fn test_deps_no_includes_is_empty() {
    let env = TestEnv::new();
    let root = env.file("plain.glsl", &["just code"]);

    env.cmd()
        .arg("deps")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_deps_missing_include_fails() {
    let env = TestEnv::new();
    let root = env.file("main.glsl", &["#include \"ghost.glsl\""]);

    env.cmd()
        .arg("deps")
        .arg(&root)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ghost.glsl"));
}
