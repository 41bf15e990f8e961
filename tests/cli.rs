//! Command-line behavior of the built binary

use std::process::Command;

fn mbitselect() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mbitselect"))
}

#[test]
fn test_invalid_fallback_fails_without_output() {
    let output = mbitselect()
        .args(["--fallback", "microbit-v3"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("microbit-v3"));
}

#[test]
fn test_fallback_names_are_case_sensitive() {
    let output = mbitselect().args(["--fallback", "MICROBIT"]).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_help_lists_targets() {
    let output = mbitselect().arg("--help").output().unwrap();

    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("--fallback"));
    assert!(help.contains("microbit-v2"));
}
