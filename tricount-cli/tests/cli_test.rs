// End-to-end tests for the `tricount` binary

use std::fmt::Write as _;
use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

fn tricount(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tricount");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

/// No arguments: reads input.txt from the working directory
#[test]
fn test_default_input_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("input.txt"),
        "The cat sat on the mat.\nThe cat sat on the hat!\n",
    )
    .unwrap();

    let output = tricount(&dir).output().unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 7);
    assert!(lines[..3].contains(&"the cat sat 2".to_string()));
    assert!(lines[..3].contains(&"cat sat on 2".to_string()));
    assert!(lines[..3].contains(&"sat on the 2".to_string()));
    assert!(lines.contains(&"on the mat 1".to_string()));
    assert!(lines.contains(&"the mat the 1".to_string()));
}

/// Two arguments: the second names the file, the first is ignored
#[test]
fn test_second_argument_is_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("book.txt"), "one two three one two three").unwrap();
    fs::write(dir.path().join("input.txt"), "should not be read at all").unwrap();

    let output = tricount(&dir).arg("whatever").arg("book.txt").output().unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "one two three 2");
    assert_eq!(lines.len(), 3);
    assert!(!lines.iter().any(|l| l.starts_with("should not be")));
}

/// A flag-like first argument is still ignored; the second names the file
#[test]
fn test_flag_like_mode_is_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("book.txt"), "one two three one two three").unwrap();

    for mode in ["-i", "--stdin", "--help", "--version"] {
        let output = tricount(&dir).arg(mode).arg("book.txt").output().unwrap();
        assert!(output.status.success(), "mode {mode}");

        let lines = stdout_lines(&output);
        assert_eq!(
            lines.first().map(String::as_str),
            Some("one two three 2"),
            "mode {mode}"
        );
        assert_eq!(lines.len(), 3, "mode {mode}");
    }
}

/// `-h` alone is a mode without a path, not a help request
#[test]
fn test_lone_flag_is_mode_without_path() {
    let dir = TempDir::new().unwrap();

    tricount(&dir)
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error occurred while opening the file",
        ));
}

/// Output is capped at 100 lines in descending count order
#[test]
fn test_output_capped_at_one_hundred() {
    let dir = TempDir::new().unwrap();

    // "alpha beta <word i>" repeated i times, over 400 distinct trigrams overall
    let mut text = String::new();
    for i in 1..=150u32 {
        let word = format!("q{}", to_letters(i));
        for _ in 0..i {
            writeln!(text, "alpha beta {word}").unwrap();
            writeln!(text, "x").unwrap();
        }
    }
    fs::write(dir.path().join("input.txt"), text).unwrap();

    let output = tricount(&dir).output().unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 100);

    let counts: Vec<u64> = lines
        .iter()
        .map(|l| l.rsplit(' ').next().unwrap().parse().unwrap())
        .collect();
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    assert!(counts[0] >= 150);
}

/// Missing file: error is logged, nothing printed, exit code stays 0
#[test]
fn test_missing_file_logs_and_continues() {
    let dir = TempDir::new().unwrap();

    tricount(&dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error occurred while opening the file",
        ))
        .stderr(predicate::str::contains("input.txt"));
}

/// A mode argument without a path is reported as an open failure
#[test]
fn test_mode_without_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.txt"), "a b c d").unwrap();

    tricount(&dir)
        .arg("only-mode")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error occurred while opening the file",
        ));
}

/// Invalid UTF-8 aborts the scan; the partial counts are not reported
#[test]
fn test_scan_failure_logs_and_prints_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.txt"), b"one two three\n\xff\xfe\n").unwrap();

    tricount(&dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error occurred while scanning the file",
        ));
}

/// Empty input: no output, no error
#[test]
fn test_empty_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.txt"), "").unwrap();

    tricount(&dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error").not());
}

/// Punctuation, digits and escape literals never appear in sequences
#[test]
fn test_sequences_are_lowercase_letters() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("input.txt"),
        "Hello, World! 42 times\\nAGAIN\thello world times again.\r\n",
    )
    .unwrap();

    let output = tricount(&dir).output().unwrap();
    let lines = stdout_lines(&output);

    assert!(!lines.is_empty());
    for line in &lines {
        let (sequence, count) = line.rsplit_once(' ').unwrap();
        assert!(count.parse::<u64>().is_ok());
        assert_eq!(sequence.split(' ').count(), 3);
        assert!(sequence.bytes().all(|b| b == b' ' || b.is_ascii_lowercase()));
    }
    assert!(lines.contains(&"hello world times 2".to_string()));
}

fn to_letters(mut n: u32) -> String {
    let mut out = String::new();
    loop {
        out.insert(0, (b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    out
}
