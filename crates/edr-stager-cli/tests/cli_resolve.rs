use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn stager() -> Command {
    Command::cargo_bin("edr-stager").unwrap()
}

#[test]
fn resolve_prints_compatible_release() {
    stager()
        .args(["resolve", "0.16.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("~=0.16.0"));
}

#[test]
fn resolve_reported_wins_over_fallback() {
    stager()
        .args(["resolve", "5.3.1", "--fallback", "2.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("~=5.3.0"));
}

#[test]
fn resolve_fallback_only() {
    stager()
        .args(["resolve", "--fallback", "2.0.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("~=2.0.0"));
}

#[test]
fn resolve_nothing_is_latest() {
    stager()
        .args(["resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("latest (no version reported)"));
}

#[test]
fn resolve_invalid_version_fails() {
    stager()
        .args(["resolve", "0.16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid version"))
        .stderr(predicate::str::contains("0.16"));
}

#[test]
fn resolve_invalid_fallback_fails() {
    stager()
        .args(["resolve", "--fallback", "not-a-version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-version"));
}
