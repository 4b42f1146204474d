//! Integration tests for the tally binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn tally() -> Command {
    Command::cargo_bin("tally").unwrap()
}

#[test]
fn process_txt_reports_stats() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("report.txt");
    std::fs::write(&file, "Total: 1,250.50 USD (up 12%)").unwrap();

    tally()
        .arg("process")
        .arg(&file)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 numeric tokens"))
        .stdout(predicate::str::contains("sum:  1262.5"));
}

#[test]
fn process_emits_json_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data.csv");
    std::fs::write(&file, "item,price\nwidget,12.50\ngadget,7\n").unwrap();

    tally()
        .arg("process")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 2"))
        .stdout(predicate::str::contains("\"sum\": 19.5"));
}

#[test]
fn percent_as_fraction_flag_rescales() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("pct.txt");
    std::fs::write(&file, "growth 10%").unwrap();

    tally()
        .arg("process")
        .arg(&file)
        .args(["--percent-as-fraction", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sum:  0.1"));
}

#[test]
fn empty_document_is_reported_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("blank.txt");
    std::fs::write(&file, "   \n  \n").unwrap();

    tally()
        .arg("process")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No text extracted"));
}

#[test]
fn missing_input_fails() {
    tally()
        .args(["process", "/no/such/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn unknown_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data.bin");
    std::fs::write(&file, "12 34").unwrap();

    tally()
        .arg("process")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn batch_writes_summary_csv() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "1 and 2").unwrap();
    std::fs::write(dir.path().join("b.txt"), "10").unwrap();
    let out = dir.path().join("out");

    tally()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .arg("--summary")
        .args(["--output-dir"])
        .arg(&out)
        .assert()
        .success();

    let summary = std::fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.contains("file,count,sum,min,max,mean,error"));
    assert!(summary.contains("a.txt,2,3,1,2,1.5,"));
    assert!(summary.contains("b.txt,1,10,10,10,10,"));
}

#[test]
fn batch_with_no_matches_fails() {
    tally()
        .args(["batch", "/tmp/definitely-no-such-dir-*/x.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn config_show_prints_engine_defaults() {
    tally()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("context_radius"));
}
