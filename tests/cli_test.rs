use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("fieldmask"));
    cmd.arg("tests/fixtures/cpf.csv").arg("--mask").arg("999.999.999-99");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("step,event,display,value,caret"))
        .stdout(predicate::str::contains("1,focus,,,0"))
        .stdout(predicate::str::contains("2,input,111,111,3"))
        .stdout(predicate::str::contains("3,input,111.4,111.4,5"))
        .stdout(predicate::str::contains(
            "4,input,111.444.777-35,111.444.777-35,14",
        ))
        .stdout(predicate::str::contains(
            "5,backspace,111.444.777-3,111.444.777-3,13",
        ));

    Ok(())
}

#[test]
fn test_cli_requires_a_field_kind() {
    let mut cmd = Command::new(cargo_bin!("fieldmask"));
    cmd.arg("tests/fixtures/cpf.csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing field kind"));
}

#[test]
fn test_cli_mask_and_currency_conflict() {
    let mut cmd = Command::new(cargo_bin!("fieldmask"));
    cmd.arg("tests/fixtures/cpf.csv")
        .arg("--mask")
        .arg("99")
        .arg("--currency");

    cmd.assert().failure();
}

#[test]
fn test_cli_missing_script() {
    let mut cmd = Command::new(cargo_bin!("fieldmask"));
    cmd.arg("tests/fixtures/missing.csv").arg("--currency");

    cmd.assert().failure();
}
