//! Integration tests for the teiden CLI
//!
//! The pdftotext step is exercised through `--from-raw` fixtures so the
//! tests do not depend on an installed extraction tool.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SCHEDULE: &str = "\
第１グループ
【宮城県】
仙台市青葉区
一番町１－１，二番町２－２
第２グループ
";

#[test]
fn convert_from_raw_writes_sibling_address_list() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sendai.rawtxt"), SCHEDULE).unwrap();

    let mut cmd = Command::cargo_bin("teiden").unwrap();
    cmd.arg("convert")
        .arg("--from-raw")
        .arg("--quiet")
        .arg(dir.path());

    cmd.assert().success();

    let content = fs::read_to_string(dir.path().join("sendai.txt")).unwrap();
    assert_eq!(
        content,
        "宮城県仙台市青葉区一番町１－１ 1\n宮城県仙台市青葉区二番町２－２ 1\n"
    );
}

#[test]
fn malformed_document_is_reported_but_batch_continues() {
    let dir = TempDir::new().unwrap();
    // Address text before any municipality: fatal for this document.
    fs::write(
        dir.path().join("broken.rawtxt"),
        "第１グループ\n【宮城県】\nどこかの番地\n",
    )
    .unwrap();
    fs::write(dir.path().join("good.rawtxt"), SCHEDULE).unwrap();

    let mut cmd = Command::cargo_bin("teiden").unwrap();
    cmd.arg("convert")
        .arg("--from-raw")
        .arg("--quiet")
        .arg(dir.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("failed to convert"))
        .stderr(predicate::str::contains("broken.rawtxt"));

    // The good document was still converted; the broken one produced
    // no output file.
    assert!(dir.path().join("good.txt").is_file());
    assert!(!dir.path().join("broken.txt").exists());
}

#[test]
fn extraction_failure_is_isolated_per_document() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("doc.pdf"), b"%PDF-1.4").unwrap();

    let mut cmd = Command::cargo_bin("teiden").unwrap();
    cmd.arg("convert")
        .arg("--tool")
        .arg("/nonexistent/pdftotext")
        .arg("--quiet")
        .arg(dir.path());

    // The batch itself still succeeds.
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("failed to convert"));

    assert!(!dir.path().join("doc.txt").exists());
}

#[test]
fn parallel_mode_converts_every_document() {
    let dir = TempDir::new().unwrap();
    for name in ["a", "b", "c"] {
        fs::write(dir.path().join(format!("{name}.rawtxt")), SCHEDULE).unwrap();
    }

    let mut cmd = Command::cargo_bin("teiden").unwrap();
    cmd.arg("convert")
        .arg("--from-raw")
        .arg("--parallel")
        .arg("--quiet")
        .arg(dir.path());

    cmd.assert().success();

    for name in ["a", "b", "c"] {
        let content = fs::read_to_string(dir.path().join(format!("{name}.txt"))).unwrap();
        assert!(content.contains("宮城県仙台市青葉区一番町１－１ 1"));
    }
}

#[test]
fn empty_directory_succeeds_with_warning() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("teiden").unwrap();
    cmd.arg("convert").arg("--from-raw").arg("--quiet").arg(dir.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("no .rawtxt files found"));
}

#[test]
fn non_directory_target_fails() {
    let mut cmd = Command::cargo_bin("teiden").unwrap();
    cmd.arg("convert").arg("/nonexistent/dir");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn help_lists_convert_command() {
    let mut cmd = Command::cargo_bin("teiden").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("convert"));
}
