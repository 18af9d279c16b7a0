use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::cargo_bin_cmd!("yolk");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("sensitivity"));
    Ok(())
}

#[test]
fn missing_constants_file_fails() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("yolk");
    cmd.args(["--constants", "no-such-file.yaml", "simulate"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load constants"));
}
