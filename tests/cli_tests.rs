//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn txquery() -> Command {
    let mut cmd = Command::cargo_bin("txquery").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("TXQUERY_PAGE_SIZE_LIMIT");
    cmd
}

#[test]
fn test_version_flag() {
    txquery()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("txquery"));
}

#[test]
fn test_help_flag() {
    txquery()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A CLI tool for building and parsing get_transactions commands",
        ));
}

#[test]
fn test_encode_defaults() {
    txquery()
        .args(["--from-version", "10", "--limit", "5"])
        .assert()
        .success()
        .stdout("get_transactions --fromVersion 10 --limit 5 --includeEvents --prettify\n");
}

#[test]
fn test_encode_unchecked_boxes() {
    txquery()
        .args([
            "--from-version",
            "0",
            "--limit",
            "1",
            "--no-include-events",
            "--no-prettify",
        ])
        .assert()
        .success()
        .stdout("get_transactions --fromVersion 0 --limit 1 --includeEvents false\n");
}

#[test]
fn test_missing_from_version() {
    txquery()
        .args(["--limit", "5"])
        .assert()
        .failure()
        .code(2) // Invalid argument
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("fromVersion"));
}

#[test]
fn test_non_numeric_limit() {
    txquery()
        .args(["--from-version", "1", "--limit", "many"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("'many'"));
}

#[test]
fn test_limit_above_page_size() {
    txquery()
        .args(["--from-version", "1", "--limit", "1001"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("page size limit of 1000"));

    txquery()
        .args(["--from-version", "1", "--limit", "1001", "--page-size-limit", "5000"])
        .assert()
        .success();
}

#[test]
fn test_page_size_limit_from_env() {
    txquery()
        .env("TXQUERY_PAGE_SIZE_LIMIT", "10")
        .args(["--from-version", "1", "--limit", "11"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("page size limit of 10"));

    txquery()
        .env("TXQUERY_PAGE_SIZE_LIMIT", "10")
        .args(["--from-version", "1", "--limit", "11", "--page-size-limit", "20"])
        .assert()
        .success();
}

#[test]
fn test_missing_config_error() {
    txquery()
        .args(["--config", "nonexistent.yaml"])
        .assert()
        .failure()
        .code(1) // Configuration error
        .stderr(predicate::str::contains("Request file not found"));
}

#[test]
fn test_config_with_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("query.yaml");

    let config_content = r"
fromVersion: 500
limit: 20
prettify: false
";

    fs::write(&config_path, config_content).unwrap();

    txquery()
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(["--limit", "30"])
        .assert()
        .success()
        .stdout("get_transactions --fromVersion 500 --limit 30 --includeEvents\n");
}

#[test]
fn test_config_page_size_limit() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("query.yaml");
    fs::write(&config_path, "fromVersion: 1\nlimit: 20\npageSizeLimit: 10\n").unwrap();

    txquery()
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_decode_prints_request_file() {
    txquery()
        .args([
            "--decode",
            "get_transactions --fromVersion 0 --limit 1 --includeEvents false",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("fromVersion: 0"))
        .stdout(predicate::str::contains("limit: 1"))
        .stdout(predicate::str::contains("includeEvents: false"))
        .stdout(predicate::str::contains("prettify: false"));
}

#[test]
fn test_decode_bogus() {
    txquery()
        .args(["--decode", "bogus"])
        .assert()
        .failure()
        .code(3) // Parse error
        .stderr(predicate::str::contains("expected command 'get_transactions'"));
}

#[test]
fn test_decode_output_feeds_config() {
    let command = "get_transactions --fromVersion 42 --limit 7 --includeEvents --prettify";

    let output = txquery().args(["--decode", command]).output().unwrap();
    assert!(output.status.success());

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("decoded.yaml");
    fs::write(&config_path, &output.stdout).unwrap();

    txquery()
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .assert()
        .success()
        .stdout(format!("{command}\n"));
}

#[test]
fn test_decode_conflicts_with_fields() {
    txquery()
        .args(["--decode", "bogus", "--limit", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
