use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_import_skips_malformed_rows() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "customerId, amount").unwrap();
    // Valid request
    writeln!(csv, "cust-1, 49.99").unwrap();
    // Text in amount field
    writeln!(csv, "cust-2, not_a_number").unwrap();
    // Negative amount (parses, fails validation)
    writeln!(csv, "cust-3, -5.0").unwrap();
    // Valid request again
    writeln!(csv, "cust-4, 2.00").unwrap();

    let mut cmd = Command::new(cargo_bin!("payment-orchestrator"));
    cmd.arg("import").arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading request"))
        .stderr(predicate::str::contains("Error creating payment"))
        .stdout(predicate::str::contains("cust-1"))
        .stdout(predicate::str::contains("cust-4"))
        .stdout(predicate::str::contains("cust-2").not())
        .stdout(predicate::str::contains("cust-3").not());
}

#[test]
fn test_import_whitespace_customer_rejected() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "customerId, amount").unwrap();
    // Trim::All collapses the field to empty, so validation rejects it
    writeln!(csv, "   , 10.0").unwrap();

    let mut cmd = Command::new(cargo_bin!("payment-orchestrator"));
    cmd.arg("import").arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error creating payment"));
}
