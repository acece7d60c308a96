use assert_cmd::Command;
use clap::Parser;
use filemux::cli::{normalize_flag_args, CliArgs};
use filemux::MuxConfig;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn filemux() -> Command {
    Command::cargo_bin("filemux").unwrap()
}

#[test]
fn test_prints_compiled_document_for_relative_paths() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.txt"), "world").unwrap();

    filemux()
        .current_dir(dir.path())
        .args(["a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(
            "Here's the compiled content from multiple files:\n\n\
             ### File: a.txt\n```\nhello\n```\n\n---\n\n\
             ### File: b.txt\n```\nworld\n```\n\n",
        );
}

#[test]
fn test_no_arguments_prints_usage_and_exits_one() {
    filemux()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unmatched_glob_exits_one_naming_pattern() {
    let dir = tempdir().unwrap();

    filemux()
        .current_dir(dir.path())
        .arg("*.missing")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "No files matched pattern '*.missing'",
        ));
}

#[test]
fn test_missing_path_exits_one() {
    let dir = tempdir().unwrap();

    filemux()
        .current_dir(dir.path())
        .arg("nope.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "File or directory 'nope.txt' not found",
        ));
}

#[test]
fn test_large_file_requires_force() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("big.log"), vec![b'q'; 500 * 1024 + 1]).unwrap();

    filemux()
        .current_dir(dir.path())
        .arg("big.log")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is too large"));

    filemux()
        .current_dir(dir.path())
        .args(["-f", "big.log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### File: big.log"));
}

#[test]
fn test_binary_warning_goes_to_stderr() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("blob.bin"), b"ab\x00cd").unwrap();

    filemux()
        .current_dir(dir.path())
        .arg("blob.bin")
        .assert()
        .success()
        .stdout(predicate::str::contains("### File: blob.bin"))
        .stderr(predicate::str::contains("appears to be binary"));
}

#[test]
fn test_current_directory_paths_have_no_dot_prefix() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/guide.md"), "guide").unwrap();

    filemux()
        .current_dir(dir.path())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("### File: docs/guide.md\n"));
}

#[test]
fn test_short_and_long_flags_parse() {
    let args = CliArgs::try_parse_from(["filemux", "-c", "-f", "a.txt", "dir/"]).unwrap();
    assert!(args.clipboard);
    assert!(args.force);
    assert_eq!(args.files, vec!["a.txt", "dir/"]);

    let args = CliArgs::try_parse_from(["filemux", "--clipboard", "a.txt"]).unwrap();
    assert!(args.clipboard);
    assert!(!args.force);
}

#[test]
fn test_single_dash_clipboard_flag_is_accepted() {
    let argv = normalize_flag_args(["filemux", "-clipboard", "a.txt"]);
    let args = CliArgs::try_parse_from(argv).unwrap();

    assert!(args.clipboard);
    assert_eq!(args.files, vec!["a.txt"]);
}

#[test]
fn test_flag_normalization_stops_at_terminator() {
    let argv = normalize_flag_args(["filemux", "--", "-clipboard"]);
    let args = CliArgs::try_parse_from(argv).unwrap();

    assert!(!args.clipboard);
    assert_eq!(args.files, vec!["-clipboard"]);
}

#[test]
fn test_cli_args_convert_to_config() {
    let args = CliArgs::try_parse_from(["filemux", "-f", "x"]).unwrap();
    let config = MuxConfig::from(&args);

    assert!(config.force);
    assert!(!config.clipboard);
    assert_eq!(config.max_file_size, 500 * 1024);
}
