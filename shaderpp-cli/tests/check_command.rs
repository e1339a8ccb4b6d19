//! Integration tests for the `check` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_check_clean_tree_succeeds() {
    let env = TestEnv::new();
    env.file("lib.glsl", &["c"]);
    let root = env.file("main.glsl", &["#include \"lib.glsl\""]);

    env.cmd()
        .arg("check")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_check_reports_each_broken_file() {
    let env = TestEnv::new();
    let good = env.file("good.glsl", &["fine"]);
    let missing = env.file("missing.glsl", &["#include \"ghost.glsl\""]);
    let cyclic = env.file("cyclic.glsl", &["#include \"cyclic.glsl\""]);

    env.cmd()
        .arg("check")
        .arg(&good)
        .arg(&missing)
        .arg(&cyclic)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ghost.glsl"))
        .stderr(predicate::str::contains("circular include"))
        .stderr(predicate::str::contains("2 file(s) failed to preprocess"));
}

#[test]
fn test_check_requires_at_least_one_file() {
    let env = TestEnv::new();
    env.cmd().arg("check").assert().failure().code(2);
}

#[test]
fn test_check_verbose_lists_ok_files() {
    let env = TestEnv::new();
    let root = env.file("main.glsl", &["fine"]);

    env.cmd()
        .arg("--verbose")
        .arg("check")
        .arg(&root)
        .assert()
        .success()
        .stderr(predicate::str::contains("ok:"));
}
