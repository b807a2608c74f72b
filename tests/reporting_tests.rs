use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_invoice_files_written_per_processed_request() {
    let file = NamedTempFile::new().unwrap();
    common::write_commands(
        file.path(),
        &[
            "submit,1,electricity,10.0,false",
            "submit,2,water,20.0,true",
            "process,,,,",
            "process,,,,",
        ],
    )
    .unwrap();

    let data_dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::new(cargo_bin!("billflow"));
    cmd.arg(file.path()).arg("--data-dir").arg(data_dir.path());
    cmd.assert().success();

    let urgent_invoice =
        std::fs::read_to_string(data_dir.path().join("invoice_2.csv")).unwrap();
    assert!(urgent_invoice.contains("2,water,20.0,"));
    assert!(urgent_invoice.contains("Urgent"));

    let general_invoice =
        std::fs::read_to_string(data_dir.path().join("invoice_1.csv")).unwrap();
    assert!(general_invoice.contains("1,electricity,10.0,"));
    assert!(general_invoice.contains("Normal"));
}

#[test]
fn test_daily_log_export() {
    let file = NamedTempFile::new().unwrap();
    common::write_commands(
        file.path(),
        &[
            "submit,1,electricity,10.0,false",
            "process,,,,",
            "export,,,,",
        ],
    )
    .unwrap();

    let data_dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::new(cargo_bin!("billflow"));
    cmd.arg(file.path()).arg("--data-dir").arg(data_dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("daily log written (1 entries)"));

    let daily_log =
        std::fs::read_to_string(data_dir.path().join("daily_log.csv")).unwrap();
    let lines: Vec<&str> = daily_log.lines().collect();
    assert_eq!(lines[0], "id,type,amount,timestamp,urgency");
    assert!(lines[1].starts_with("1,electricity,10.0,"));
}

#[test]
fn test_export_with_empty_history() {
    let file = NamedTempFile::new().unwrap();
    common::write_commands(file.path(), &["export,,,,"]).unwrap();

    let data_dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::new(cargo_bin!("billflow"));
    cmd.arg(file.path()).arg("--data-dir").arg(data_dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("daily log written (0 entries)"));

    assert!(data_dir.path().join("daily_log.csv").exists());
}
