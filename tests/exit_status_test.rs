//! Exit status and error reporting of the bikeshare binary

mod common;

use common::create_data_dir;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_bikeshare(data_dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bikeshare"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--no-color", "--no-timing"])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for command")
}

#[test]
fn test_invalid_city_exits_with_failure() {
    let dir = create_data_dir();
    let output = run_bikeshare(dir.path(), &["report", "--city", "boston"], "");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains(
            "ERROR The city you selected is not valid, please restart the program and try again"
        ),
        "Unexpected stderr: {stderr}"
    );
}

#[test]
fn test_empty_report_selection_exits_successfully() {
    let dir = create_data_dir();
    let output = run_bikeshare(
        dir.path(),
        &["report", "--city", "chicago", "--month", "jan", "--day", "sun"],
        "",
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout.matches("No data for this selection.").count(), 4);
}

#[test]
fn test_declining_restart_exits_successfully() {
    let dir = create_data_dir();
    let output = run_bikeshare(dir.path(), &[], "chicago\nnone\nno\nno\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Would you like to restart? Enter yes or no."));
}

#[test]
fn test_closed_input_exits_successfully() {
    let dir = create_data_dir();
    let output = run_bikeshare(dir.path(), &[], "");
    assert_eq!(output.status.code(), Some(0));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("ERROR"));
}
