use crate::batch::{check_input, run_batch};
use crate::conf::{ErrorPolicy, MonitorConfig};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const INPUT: &str = "1 t1;ERROR;4\n1 t2;WARN;2\n3 AFTER t1\n";

fn config(dir: &std::path::Path, append: bool) -> MonitorConfig {
    MonitorConfig {
        input: dir.join("input.txt"),
        output: dir.join("output.txt"),
        append,
        on_error: ErrorPolicy::Abort,
    }
}

#[test]
fn run_batch_writes_output_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), false);
    fs::write(&cfg.input, INPUT).unwrap();

    // Act
    let report = run_batch(&cfg).unwrap();

    // Assert
    assert_eq!(report.records, 2);
    assert_eq!(
        fs::read_to_string(&cfg.output).unwrap(),
        "No output\nNo output\nMin: 2, Max: 2, Mean: 2\n"
    );
}

#[test]
fn append_mode_keeps_previous_results() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), true);
    fs::write(&cfg.input, "1 t1;A;1\n").unwrap();
    fs::write(&cfg.output, "earlier\n").unwrap();

    run_batch(&cfg).unwrap();

    assert_eq!(fs::read_to_string(&cfg.output).unwrap(), "earlier\nNo output\n");
}

#[test]
fn truncate_mode_replaces_previous_results() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), false);
    fs::write(&cfg.input, "1 t1;A;1\n").unwrap();
    fs::write(&cfg.output, "earlier\n").unwrap();

    run_batch(&cfg).unwrap();

    assert_eq!(fs::read_to_string(&cfg.output).unwrap(), "No output\n");
}

#[test]
fn aborted_batch_leaves_output_untouched() {
    // Arrange
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), false);
    fs::write(&cfg.input, "1 t1;A;1\n2 A\n3 SIDEWAYS t1\n").unwrap();
    fs::write(&cfg.output, "earlier\n").unwrap();

    // Act
    let err = run_batch(&cfg).unwrap_err();

    // Assert
    assert!(format!("{err:#}").contains("line 3"));
    assert_eq!(fs::read_to_string(&cfg.output).unwrap(), "earlier\n");
}

#[test]
fn aborted_batch_does_not_create_output() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), true);
    fs::write(&cfg.input, "2 A\n9 nope\n").unwrap();

    run_batch(&cfg).unwrap_err();

    assert!(!cfg.output.exists());
}

#[test]
fn missing_input_is_reported_with_path() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), false);

    let err = run_batch(&cfg).unwrap_err();

    assert!(err.to_string().contains("input.txt"));
    assert!(!cfg.output.exists());
}

#[test]
fn check_summarizes_the_pre_pass() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "1 t2;WARN;1\n4 BEFORE ERROR t1\n2 INFO\n").unwrap();

    let summary = check_input(&path).unwrap();

    assert_eq!(summary.commands, 3);
    assert_eq!(summary.timestamps, 2);
    assert_eq!(summary.first_timestamp.as_deref(), Some("t1"));
    assert_eq!(summary.last_timestamp.as_deref(), Some("t2"));
    assert_eq!(summary.categories, vec!["ERROR", "INFO", "WARN"]);
}

#[test]
fn check_rejects_malformed_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "2 A\n2\n").unwrap();

    let err = check_input(&path).unwrap_err();

    assert!(format!("{err:#}").contains("line 2"));
}
