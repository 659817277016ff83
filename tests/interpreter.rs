//! End-to-end tests driving the rill binary over pipes.

#![cfg(unix)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn rill() -> assert_cmd::Command {
    cargo_bin_cmd!("rill")
}

#[test]
fn exit_terminates_with_success() {
    rill()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn exit_ignores_extra_tokens() {
    rill()
        .write_stdin("exit now please\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn end_of_input_ends_the_session() {
    rill()
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn blank_input_is_a_no_op() {
    rill()
        .write_stdin("  \n\t\n\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn cd_without_argument_reports_usage() {
    rill()
        .write_stdin("cd\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("expected an argument to \"cd\""));
}

#[test]
fn cd_to_nonexistent_directory_reports_error_and_continues() {
    rill()
        .write_stdin("cd /nonexistent-path-xyz\necho still-alive\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("rill: "))
        .stdout(predicate::str::contains("still-alive"));
}

#[test]
fn unknown_command_does_not_end_the_session() {
    rill()
        .write_stdin("no-such-command-xyz\necho recovered\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "command not found: no-such-command-xyz",
        ))
        .stdout(predicate::str::contains("recovered"));
}

#[test]
fn quiet_flag_suppresses_not_found_report() {
    rill()
        .arg("-q")
        .write_stdin("no-such-command-xyz\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn cd_affects_later_external_commands() {
    let dir = TempDir::new().expect("temp dir");
    let target = dir.path().canonicalize().expect("canonicalize");

    rill()
        .write_stdin(format!("cd {}\npwd\n", target.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains(target.display().to_string()));
}

#[test]
fn external_command_output_flows_through() {
    rill()
        .write_stdin("echo hello-from-child\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello-from-child"));
}

#[test]
fn help_flag_prints_usage_and_exits() {
    rill()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rill"));
}

#[test]
fn version_flag_prints_version_and_exits() {
    rill()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rill"));
}
