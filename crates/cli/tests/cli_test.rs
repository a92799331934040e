//! End-to-end tests for the docbridge binary

use assert_cmd::Command;
use predicates::prelude::*;

fn docbridge() -> Command {
    let mut cmd = Command::cargo_bin("docbridge").expect("binary should build");
    cmd.env_remove("DOCBRIDGE_REASON_ENCODING")
        .env_remove("DOCBRIDGE_ENGINE")
        .env_remove("DOCBRIDGE_DB_PATH");
    cmd
}

#[test]
fn test_encode_legacy() {
    docbridge()
        .args(["encode", "404", "not_found", "missing"])
        .assert()
        .success()
        .stdout(r#"{"status":404,"name":"not_found","message":"missing","reason":null}"#.to_owned() + "\n");
}

#[test]
fn test_encode_persist() {
    docbridge()
        .args(["--reason-encoding", "persist", "encode", "409", "conflict", "Document update conflict."])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""reason":"Document update conflict.""#));
}

#[test]
fn test_encode_negative_status() {
    docbridge()
        .args(["encode", "-1", "odd", "negative"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status":-1"#));
}

#[test]
fn test_decode_from_stdin() {
    docbridge()
        .arg("decode")
        .write_stdin(r#"{"status":401,"name":"unauthorized","message":"Name or password is incorrect.","reason":null}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("status:  401"))
        .stdout(predicate::str::contains("name:    unauthorized"))
        .stdout(predicate::str::contains("reason:  (none)"));
}

#[test]
fn test_decode_rejects_malformed_text() {
    docbridge()
        .args(["decode", r#"{"status":404,"name":"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to reconstitute error"));
}

#[test]
fn test_inspect_remote_not_found() {
    docbridge()
        .args(["inspect", r#"{"error":"not_found","reason":"Database does not exist."}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status":404"#))
        .stderr(predicate::str::contains("not_found: Database does not exist."));
}

#[test]
fn test_inspect_null() {
    docbridge()
        .args(["inspect", "null"])
        .assert()
        .success()
        .stdout("no error\n");
}

#[test]
fn test_probe_memory() {
    docbridge()
        .args(["--memory", "probe", "--require", "find"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Capabilities:"))
        .stdout(predicate::str::contains("find available"));
}

#[test]
fn test_probe_missing_capability() {
    docbridge()
        .args(["--memory", "probe", "--require", "vector"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#""name":"not_found""#));
}

#[test]
fn test_probe_load_failure_is_encoded() {
    // A regular file where the database directory should be
    let file = tempfile::NamedTempFile::new().unwrap();

    docbridge()
        .arg("--db-path")
        .arg(file.path())
        .arg("probe")
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#""status":503"#))
        .stderr(predicate::str::contains(r#""name":"load_failure""#))
        .stderr(predicate::str::contains("Client bootstrap failed"));
}
