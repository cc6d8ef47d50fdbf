use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/commands.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "client_id,tae,term,monthly_payment,total_amount",
        ))
        // 1000 at 3.2% over one year
        .stdout(predicate::str::contains("36300558A,3.2,1,84.78,1017.36"))
        // Zero-rate loan splits the capital evenly
        .stdout(predicate::str::contains("12345678Z,0,1,100.00,1200.00"));

    Ok(())
}

#[test]
fn test_cli_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/commands.csv").arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"client_id\": \"36300558A\""))
        .stdout(predicate::str::contains("\"monthly_payment\": \"84.78\""))
        .stdout(predicate::str::contains("\"total_amount\": \"1017.36\""));

    Ok(())
}

#[test]
fn test_cli_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/does-not-exist.csv");

    cmd.assert().failure();
}
