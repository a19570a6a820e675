#![cfg(feature = "storage-rocksdb")]

use assert_cmd::cargo_bin;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn run(db_path: &Path, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(cargo_bin!("payment-orchestrator"));
    cmd.arg("--db-path").arg(db_path).args(args);
    cmd.output().expect("Failed to execute command")
}

#[test]
fn test_rocksdb_persistence_recovery() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    // 1. First run: create a payment
    let output = run(&db_path, &["create", "cust-1", "49.99"]);
    assert!(output.status.success());
    let created: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(created["status"], "Pending");
    let id = created["id"].as_str().unwrap().to_string();

    // 2. Second run: confirm it using the same DB path
    let output = run(&db_path, &["confirm", &id]);
    assert!(output.status.success());
    let confirmed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(confirmed["id"], id.as_str());
    assert_eq!(confirmed["status"], "Confirmed");

    // 3. Third run: the listing recovers the confirmed record
    let output = run(&db_path, &["list"]);
    assert!(output.status.success());
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], id.as_str());
    assert_eq!(listed[0]["status"], "Confirmed");
}

#[test]
fn test_confirmed_state_sticks_across_runs() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    let output = run(&db_path, &["create", "cust-1", "10.00"]);
    assert!(output.status.success());
    let created: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let output = run(&db_path, &["confirm", &id]);
    assert!(output.status.success());

    // A second confirm in a fresh process sees the stored Confirmed status
    let output = run(&db_path, &["confirm", &id]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not in pending status"));
}
