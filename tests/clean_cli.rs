//! End-to-end tests for `shelfsort clean`.

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;

const HEADER: &str = "Title,Local Call Number,LC Call Number,Physical Availability";

fn write_fixture(tmp: &assert_fs::TempDir, name: &str, body: &str) -> PathBuf {
    let file = tmp.child(name);
    file.write_str(body).expect("write fixture");
    file.path().to_path_buf()
}

#[test]
fn clean_writes_cleaned_columns_and_cn_from_pa() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    let input = write_fixture(
        &tmp,
        "input.csv",
        &format!(
            "{HEADER}\n\
             Intro to C,QA 76 .C15,QA76.73 .C153 and others 2019,Stacks;due;QA76 .C15 2019;barcode\n"
        ),
    );
    let output = tmp.child("out.csv");

    Command::cargo_bin("shelfsort")
        .expect("binary")
        .arg("clean")
        .arg(&input)
        .arg("--output")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("utf-8"));

    let written = std::fs::read_to_string(output.path()).expect("read output");
    assert!(written.starts_with('\u{feff}'), "output must carry a BOM");

    let mut lines = written.trim_start_matches('\u{feff}').lines();
    assert_eq!(
        lines.next(),
        Some("Title,Local Call Number,LC Call Number,Physical Availability,CNfromPA")
    );
    assert_eq!(
        lines.next(),
        Some("Intro to C,QA76.C15,QA76.73.C153 2019,Stacks,QA76.C15 2019")
    );
}

#[test]
fn clean_passes_extra_columns_through() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    let input = write_fixture(
        &tmp,
        "input.csv",
        &format!("{HEADER},Barcode\nBook,QA1,,loc;a;PS1;b,31234\n"),
    );
    let output = tmp.child("out.csv");

    Command::cargo_bin("shelfsort")
        .expect("binary")
        .arg("clean")
        .arg(&input)
        .arg("-o")
        .arg(output.path())
        .assert()
        .success();

    let written = std::fs::read_to_string(output.path()).expect("read output");
    let mut lines = written.trim_start_matches('\u{feff}').lines();
    assert_eq!(lines.next(), Some(&format!("{HEADER},Barcode,CNfromPA")[..]));
    assert_eq!(lines.next(), Some("Book,QA1,,loc,31234,PS1"));
}

#[test]
fn clean_rejects_missing_required_column() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    let input = write_fixture(
        &tmp,
        "input.csv",
        "Title,Local Call Number,LC Call Number\nBook,QA1,QA2\n",
    );

    Command::cargo_bin("shelfsort")
        .expect("binary")
        .arg("clean")
        .arg(&input)
        .arg("-o")
        .arg(tmp.child("out.csv").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing expected column: Physical Availability",
        ));
}

#[test]
fn clean_decodes_windows_1252_input() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    let input = tmp.child("legacy.csv");
    let mut body = Vec::new();
    body.extend_from_slice(HEADER.as_bytes());
    // 0xE9 is é in Windows-1252 and invalid as standalone UTF-8
    body.extend_from_slice(b"\nCaf\xe9,QA1,,loc;a;b;c\n");
    input.write_binary(&body).expect("write fixture");
    let output = tmp.child("out.csv");

    Command::cargo_bin("shelfsort")
        .expect("binary")
        .arg("clean")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("windows-1252"));

    let written = std::fs::read_to_string(output.path()).expect("read output");
    assert!(written.contains("Café"));
}

#[test]
fn clean_dry_run_writes_nothing() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    let input = write_fixture(&tmp, "input.csv", &format!("{HEADER}\nBook,QA1,,loc\n"));
    let output = tmp.child("out.csv");

    Command::cargo_bin("shelfsort")
        .expect("binary")
        .arg("--dry-run")
        .arg("clean")
        .arg(&input)
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"));

    assert!(!output.path().exists());
}

#[test]
fn clean_quiet_suppresses_summary() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    let input = write_fixture(&tmp, "input.csv", &format!("{HEADER}\nBook,QA1,,loc\n"));
    let output = tmp.child("out.csv");

    Command::cargo_bin("shelfsort")
        .expect("binary")
        .arg("--quiet")
        .arg("clean")
        .arg(&input)
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(output.path().exists());
}
