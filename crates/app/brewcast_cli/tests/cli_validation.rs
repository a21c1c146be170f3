//! CLI tests for the locally-guarded paths — these must fail fast without
//! ever reaching a backend, so they point the client at a dead address.

use assert_cmd::Command;
use predicates::prelude::*;

fn brewcast() -> Command {
    let mut cmd = Command::cargo_bin("brewcast").expect("binary");
    // Nothing listens here; a command that tries the network fails differently.
    cmd.env("BREWCAST_API_URL", "http://127.0.0.1:1");
    cmd.env("BREWCAST_API_TIMEOUT_SECS", "1");
    cmd
}

#[test]
fn version_prints_name_and_version() {
    brewcast()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brewcast_cli"));
}

#[test]
fn deleting_default_is_refused_locally() {
    brewcast()
        .args(["delete", "Default", "--yes"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Cannot delete the Default preset"));
}

#[test]
fn creating_with_empty_name_is_refused_locally() {
    brewcast()
        .args(["create", ""])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please enter a preset name"));
}

#[test]
fn set_requires_field_assignments() {
    brewcast()
        .args(["set", "Default"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FIELD=VALUE"));
}
