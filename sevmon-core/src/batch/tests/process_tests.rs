use crate::batch::{BatchError, BatchReport, ParsedLine, process, read_commands};
use crate::command::{Command, ParseError};
use crate::conf::ErrorPolicy;
use crate::error::MonitorError;
use crate::index::TimestampIndex;
use crate::monitor::LogMonitor;
use crate::registry::CategoryRegistry;
use pretty_assertions::assert_eq;

fn run(input: &str, policy: ErrorPolicy) -> Result<(String, BatchReport), BatchError> {
    let lines = read_commands(input, policy)?;
    let mut monitor = LogMonitor::prepare(lines.iter().filter_map(|l| l.command.as_ref().ok()));
    let mut sink = Vec::new();
    let report = process(&lines, &mut monitor, &mut sink, policy)?;
    Ok((String::from_utf8(sink).unwrap(), report))
}

#[test]
fn writes_one_line_per_command() {
    // Arrange
    let input = "\
1 1715744138011;INTERNAL_SERVER_ERROR;23.72
1 1715744138012;INTERNAL_SERVER_ERROR;10.17
2 INTERNAL_SERVER_ERROR
1 1715744138012;BAD_REQUEST;15.22
1 1715744138013;INTERNAL_SERVER_ERROR;23.72
3 BEFORE 1715744138011
3 AFTER 1715744138010
2 BAD_REQUEST
4 BEFORE INTERNAL_SERVER_ERROR 1715744138011
4 AFTER INTERNAL_SERVER_ERROR 1715744138010
";

    // Act
    let (out, report) = run(input, ErrorPolicy::Abort).unwrap();

    // Assert
    assert_eq!(
        out,
        "\
No output
No output
Min: 10.17, Max: 23.72, Mean: 16.945
No output
No output
Min: 0, Max: 0, Mean: 0
Min: 10.17, Max: 23.72, Mean: 18.2075
Min: 15.22, Max: 15.22, Mean: 15.22
Min: 0, Max: 0, Mean: 0
Min: 10.17, Max: 23.72, Mean: 19.203333
"
    );
    assert_eq!(
        report,
        BatchReport {
            timestamps: 4,
            categories: 2,
            records: 4,
            category_summaries: 2,
            global_queries: 2,
            category_queries: 2,
            skipped: 0,
        }
    );
    assert_eq!(report.lines(), 10);
}

#[test]
fn blank_lines_produce_no_output() {
    let (out, report) = run("\n1 t1;A;1\n\n   \n2 A\n", ErrorPolicy::Abort).unwrap();

    assert_eq!(out, "No output\nMin: 1, Max: 1, Mean: 1\n");
    assert_eq!(report.lines(), 2);
}

#[test]
fn abort_fails_before_writing_anything() {
    let err = run("1 t1;A;1\n9 nope\n2 A\n", ErrorPolicy::Abort).unwrap_err();

    assert!(matches!(
        err,
        BatchError::Parse {
            line: 2,
            source: ParseError::UnknownKind { .. }
        }
    ));
    assert_eq!(err.line(), Some(2));
}

#[test]
fn skip_emits_error_line_and_continues() {
    let (out, report) = run("1 t1;A;1\n3 SIDEWAYS t1\n2 A\n", ErrorPolicy::Skip).unwrap();

    assert_eq!(
        out,
        "No output\n\
         Error: line 2: invalid direction 'SIDEWAYS', expected BEFORE or AFTER\n\
         Min: 1, Max: 1, Mean: 1\n"
    );
    assert_eq!(report.skipped, 1);
    assert_eq!(report.lines(), 3);
}

#[test]
fn skip_keeps_malformed_lines_in_order() {
    let lines = read_commands("2 A\n1 broken\n", ErrorPolicy::Skip).unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        ParsedLine {
            line: 1,
            command: Ok(Command::CategorySummary {
                category: "A".into()
            }),
        }
    );
    assert_eq!(lines[1].line, 2);
    assert!(lines[1].command.is_err());
}

#[test]
fn lookup_failures_follow_the_policy() {
    // A monitor built for a different stream cannot resolve these names.
    let index = TimestampIndex::from_timestamps(["t1"]);
    let registry = CategoryRegistry::new(index.len(), ["A"]);
    let lines = read_commands("2 B\n3 AFTER t9\n2 A\n", ErrorPolicy::Skip).unwrap();

    let mut monitor = LogMonitor::new(index.clone(), registry.clone());
    let mut sink = Vec::new();
    let report = process(&lines, &mut monitor, &mut sink, ErrorPolicy::Skip).unwrap();
    assert_eq!(report.skipped, 2);
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "Error: line 1: unknown category 'B'\n\
         Error: line 2: unknown timestamp 't9'\n\
         Min: 0, Max: 0, Mean: 0\n"
    );

    let mut monitor = LogMonitor::new(index, registry);
    let mut sink = Vec::new();
    let err = process(&lines, &mut monitor, &mut sink, ErrorPolicy::Abort).unwrap_err();
    assert!(matches!(
        err,
        BatchError::Lookup {
            line: 1,
            source: MonitorError::UnknownCategory { .. }
        }
    ));
    assert!(sink.is_empty());
}

#[test]
fn spaced_record_names_never_enter_the_trees() {
    let input = "\
1 2024-05-01 10:00:00;BAD_REQUEST;3
1 2024-05-01T10:00:00;BAD REQUEST;3
1 2024-05-01T10:00:00;BAD_REQUEST;3
2 BAD_REQUEST
3 BEFORE 2024-05-01T10:00:01
";

    let (out, report) = run(input, ErrorPolicy::Skip).unwrap();

    assert_eq!(
        out,
        "Error: line 1: command 1 timestamp '2024-05-01 10:00:00' must not contain whitespace\n\
         Error: line 2: command 1 category 'BAD REQUEST' must not contain whitespace\n\
         No output\n\
         Min: 3, Max: 3, Mean: 3\n\
         Min: 3, Max: 3, Mean: 3\n"
    );
    assert_eq!(report.timestamps, 2);
    assert_eq!(report.records, 1);
    assert_eq!(report.skipped, 2);
}
