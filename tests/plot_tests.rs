use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn bridge_plot_creates_png() {
    let output_file = assert_fs::NamedTempFile::new("bridge.png").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("yolk");
    cmd.args(["bridge", "--plot", output_arg]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!("Bridge chart written to {output_arg}")));

    let metadata = fs::metadata(output_arg).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn seasonal_plot_creates_png() {
    let output_file = assert_fs::NamedTempFile::new("seasonal.png").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("yolk");
    cmd.args(["seasonal", "-m", "Jan", "-p", output_arg]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!("Seasonal chart written to {output_arg}")));

    let metadata = fs::metadata(output_arg).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn sensitivity_histogram_creates_png() {
    let dir = assert_fs::TempDir::new().unwrap();
    let report = dir.child("sensitivity.yaml");
    let histogram = dir.child("sensitivity.png");
    let histogram_arg = histogram.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("yolk");
    cmd.args([
        "sensitivity",
        "-o",
        report.path().to_str().unwrap(),
        "--histogram",
        histogram_arg,
        "-n",
        "300",
        "--seed",
        "7",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Sensitivity histogram written to {histogram_arg}"
        )));

    report.assert(predicate::path::exists());
    let metadata = fs::metadata(histogram.path()).unwrap();
    assert!(metadata.len() > 0);
}
