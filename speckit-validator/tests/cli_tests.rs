#![allow(clippy::unwrap_used)]
//! Stdout and exit-status contract of the `speckit-validate` binary.

mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{PLAN_OK, SPEC_OK, TASKS_OK, write};
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_speckit-validate"))
}

#[test]
fn no_arguments_prints_usage_and_exits_2() {
    cmd()
        .assert()
        .code(2)
        .stdout("Usage: speckit-validate <paths...>\n");
}

#[test]
fn well_formed_documents_pass() {
    let tmp = TempDir::new().unwrap();
    let spec = write(tmp.path(), "spec.md", SPEC_OK);
    let plan = write(tmp.path(), "plan.md", PLAN_OK);
    let tasks = write(tmp.path(), "tasks.md", TASKS_OK);

    cmd()
        .arg(&spec)
        .arg(&plan)
        .arg(&tasks)
        .assert()
        .success()
        .stdout("VALIDATION: PASS\n");
}

#[test]
fn violations_print_fail_listing_and_exit_1() {
    let tmp = TempDir::new().unwrap();
    let spec = write(tmp.path(), "spec.md", &SPEC_OK.replace("## Requirements\n", ""));
    let plan = write(tmp.path(), "plan.md", &PLAN_OK.replace("RT-7", "none"));

    cmd()
        .arg(&spec)
        .arg(&plan)
        .assert()
        .code(1)
        .stdout(
            "VALIDATION: FAIL\n \
             - [spec] Missing heading: ^##\\s+Requirements\n \
             - [plan] Evidence-to-Decision Map lacks RT-IDs\n",
        );
}

#[test]
fn unrecognized_file_is_not_validated() {
    let tmp = TempDir::new().unwrap();
    let other = write(tmp.path(), "other.md", "nothing required here\n");

    cmd()
        .arg(&other)
        .assert()
        .success()
        .stdout("VALIDATION: PASS\n");
}

#[test]
fn hyphen_leading_path_is_validated() {
    let tmp = TempDir::new().unwrap();
    let draft = tmp.path().join("-draft");
    std::fs::create_dir(&draft).unwrap();
    write(&draft, "tasks.md", &TASKS_OK.replace("T002 [US-001]", "T2 [US-001]"));

    cmd()
        .current_dir(tmp.path())
        .arg("-draft/tasks.md")
        .assert()
        .code(1)
        .stdout(contains("Line 7 fails canonical format: - [X] T2 [US-001] Wire CLI"));
}

#[test]
fn missing_recognized_file_fails_on_stderr() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("plan.md");

    cmd()
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Error: validation aborted").and(contains("failed to read")));
}

#[test]
fn json_format_reports_errors() {
    let tmp = TempDir::new().unwrap();
    let tasks = write(
        tmp.path(),
        "tasks.md",
        &TASKS_OK.replace("T001 [P1] [US-002]", "T001 [P1] [US-2]"),
    );

    let output = cmd()
        .args(["--format", "json"])
        .arg(&tasks)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["errors"][0]["line"], 6);
    assert_eq!(json["errors"][0]["kind"], "task_line_format");
}

#[test]
fn logs_stay_off_stdout() {
    let tmp = TempDir::new().unwrap();
    let spec = write(tmp.path(), "spec.md", SPEC_OK);

    cmd()
        .arg("-vv")
        .arg(&spec)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("VALIDATION: PASS\n")
        .stderr(contains("validation finished"));
}
