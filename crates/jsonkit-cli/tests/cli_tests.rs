//! Integration tests for the `jsonkit` CLI binary.
//!
//! These run the built binary through `assert_cmd`, covering stdin/stdout
//! piping, file I/O, each subcommand and error exits.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

fn jsonkit() -> Command {
    Command::cargo_bin("jsonkit").unwrap()
}

/// Parse stdout as standard JSON for structural assertions.
fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout must be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// fmt / canon
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fmt_pretty_prints_stdin() {
    jsonkit()
        .arg("fmt")
        .write_stdin(r#"{"name":"Tom","tags":[1]}"#)
        .assert()
        .success()
        .stdout("{\n  \"name\": \"Tom\",\n  \"tags\": [\n    1\n  ]\n}\n");
}

#[test]
fn canon_compacts_a_file_and_keeps_key_order() {
    let output = jsonkit()
        .args(["canon", "-i", sample_json_path()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.starts_with(r#"{"className":"3A","students":[{"name":"Tom""#));
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn canon_renders_null_as_the_string_null() {
    jsonkit()
        .arg("canon")
        .write_stdin(r#"{"a":null}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"a":"null"}"#));
}

#[test]
fn canon_writes_to_a_file() {
    let output_path = std::env::temp_dir().join("jsonkit-test-canon-output.json");
    let _ = std::fs::remove_file(&output_path);

    jsonkit()
        .args(["canon", "-i", sample_json_path(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["room"], 12);

    let _ = std::fs::remove_file(&output_path);
}

// ─────────────────────────────────────────────────────────────────────────────
// get / set
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_reads_a_dot_path() {
    jsonkit()
        .args(["get", "students.1.name", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("Lily\n");
}

#[test]
fn get_missing_path_prints_null() {
    jsonkit()
        .args(["get", "students.9.name", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn get_container_prints_compact_json() {
    jsonkit()
        .args(["get", "students.0", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(r#"{"name":"Tom","age":22,"sex":1}"#.to_string() + "\n");
}

#[test]
fn set_parses_json_values() {
    let output = jsonkit()
        .args(["set", "students.0.age", "23", "-i", sample_json_path()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["students"][0]["age"], 23);
}

#[test]
fn set_stores_invalid_json_as_a_string() {
    let output = jsonkit()
        .args(["set", "motto", "work hard", "-i", sample_json_path()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["motto"], "work hard");
}

#[test]
fn set_through_a_scalar_leaves_the_document_alone() {
    let output = jsonkit()
        .args(["set", "room.number", "1", "-i", sample_json_path()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["room"], 12);
}

// ─────────────────────────────────────────────────────────────────────────────
// any
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn any_keeps_standard_nulls() {
    jsonkit()
        .arg("any")
        .write_stdin(r#"{"a":[1,true,null,"x"]}"#)
        .assert()
        .success()
        .stdout("{\"a\":[1,true,null,\"x\"]}\n");
}

#[test]
fn any_reads_integral_floats_as_ints() {
    jsonkit()
        .arg("any")
        .write_stdin("[2.0,2.5]")
        .assert()
        .success()
        .stdout("[2,2.5]\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_json_fails() {
    for cmd in ["fmt", "canon", "any"] {
        jsonkit()
            .arg(cmd)
            .write_stdin("{not json")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to"));
    }
}

#[test]
fn missing_input_file_fails() {
    jsonkit()
        .args(["fmt", "-i", "/nonexistent/jsonkit-input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn unknown_subcommand_fails() {
    jsonkit()
        .arg("explode")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("unrecognized")));
}

#[test]
fn verbose_logs_to_stderr() {
    jsonkit()
        .args(["-v", "get", "missing"])
        .write_stdin("{}")
        .assert()
        .success()
        .stdout("null\n")
        .stderr(predicate::str::contains("nothing at path"));
}
