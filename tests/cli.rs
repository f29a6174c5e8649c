use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("gdp-chart").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gdp-chart"));
}

#[test]
fn unreachable_source_fails_without_writing_a_page() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("page.html");
    let mut cmd = Command::cargo_bin("gdp-chart").unwrap();
    cmd.args(["render", "--url", "http://127.0.0.1:9/GDP-data.json", "--out"])
        .arg(&out);
    cmd.assert().failure();
    assert!(!out.exists());
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn render_online_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("page.html");
    let mut cmd = Command::cargo_bin("gdp-chart").unwrap();
    cmd.args(["render", "--stats", "--out"]).arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("count="));
    assert!(out.exists());
}
