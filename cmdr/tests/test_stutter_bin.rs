// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Black box tests for the `stutter` binary. See:
//! 1. Binary under test: `src/bin/stutter.rs`
//! 2. `assert_cmd` : <https://docs.rs/assert_cmd/latest/assert_cmd/index.html>

use std::io::Write;

use assert_cmd::Command;
use pretty_assertions::assert_eq;

fn stutter() -> Command { Command::cargo_bin("stutter").unwrap() }

fn file_with(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{text}").unwrap();
    file
}

fn dumb_marked(text: &str) -> String {
    text.chars().map(|it| format!("\x1b[01;31m{it}\x1b[0m")).collect()
}

#[test]
fn test_dumb_highlight() {
    let file = file_with("abc abc xyz");

    let output = stutter()
        .arg("--file")
        .arg(file.path())
        .args(["--scan", "20", "--dumb"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{} {} xyz", dumb_marked("abc"), dumb_marked("abc"))
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_nothing_to_highlight_is_verbatim() {
    let file = file_with("one two three\nfour five six\n");

    let output = stutter()
        .arg("-f")
        .arg(file.path())
        .args(["--color", "truecolor"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "one two three\nfour five six\n"
    );
}

#[test]
fn test_same_seed_same_output() {
    let file = file_with("The cat saw the other cat, and the cat ran.\n");
    let run = || {
        stutter()
            .arg("-f")
            .arg(file.path())
            .args(["--color", "truecolor", "--pure-colors", "--seed", "11"])
            .output()
            .unwrap()
            .stdout
    };

    let lhs = run();
    assert_eq!(lhs, run());
    assert!(String::from_utf8_lossy(&lhs).contains("\x1b[38;2;"));
}

#[test]
fn test_ansi256_output() {
    let file = file_with("abc abc xyz");

    let output = stutter()
        .arg("-f")
        .arg(file.path())
        .args(["-s", "20", "--color", "ansi256"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("\x1b[38;5;").count(), 6);
    assert!(!stdout.contains("\x1b[38;2;"));
    assert!(stdout.ends_with(" xyz"));
}

#[test]
fn test_missing_file_exits_with_read_failure() {
    let dir = tempfile::tempdir().unwrap();

    let output = stutter()
        .arg("-f")
        .arg(dir.path().join("missing.txt"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(254));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
}

#[test]
fn test_invalid_utf8_exits_with_read_failure() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xC3, 0x28, b'a']).unwrap();

    let output = stutter().arg("-f").arg(file.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(254));
}

#[test]
fn test_no_args_exits_with_invalid_args() {
    let output = stutter().output().unwrap();

    assert_eq!(output.status.code(), Some(255));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--file"));
}

#[test]
fn test_zero_window_exits_with_invalid_args() {
    let output = stutter().args(["-f", "a.txt", "-w", "0"]).output().unwrap();
    assert_eq!(output.status.code(), Some(255));
}

#[test]
fn test_help_and_version_exit_successfully() {
    let output = stutter().arg("--help").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--window"));

    let output = stutter().arg("--version").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_log_file() {
    let file = file_with("abc abc xyz");
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("stutter.log");

    let output = stutter()
        .arg("-f")
        .arg(file.path())
        .args(["-d", "-s", "20"])
        .arg("--log-file")
        .arg(&log_file)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let log = std::fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("Start logging..."));
    assert!(log.contains("Highlight complete"));
    assert!(!log.contains('\x1b'));
}
