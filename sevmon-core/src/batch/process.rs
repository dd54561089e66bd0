use crate::batch::{BatchError, BatchReport};
use crate::command::{Command, ParseError, parse_command};
use crate::conf::ErrorPolicy;
use crate::monitor::LogMonitor;
use std::io::Write;

/// One non-blank input line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub line: usize,
    pub command: Result<Command, ParseError>,
}

/// Parses every line of `input`. Under [`ErrorPolicy::Abort`] the first
/// malformed line fails the whole read, before anything is written.
pub fn read_commands(input: &str, policy: ErrorPolicy) -> Result<Vec<ParsedLine>, BatchError> {
    let mut lines = Vec::new();

    for (i, raw) in input.lines().enumerate() {
        let line = i + 1;
        let command = match parse_command(raw) {
            Ok(Some(command)) => Ok(command),
            Ok(None) => continue,
            Err(source) if policy == ErrorPolicy::Abort => {
                return Err(BatchError::Parse { line, source });
            }
            Err(source) => Err(source),
        };
        lines.push(ParsedLine { line, command });
    }

    Ok(lines)
}

/// Replays `lines` against `monitor`, writing one line per command to `sink`.
pub fn process<W: Write>(
    lines: &[ParsedLine],
    monitor: &mut LogMonitor,
    sink: &mut W,
    policy: ErrorPolicy,
) -> Result<BatchReport, BatchError> {
    let mut report = BatchReport {
        timestamps: monitor.index().len(),
        categories: monitor.registry().len(),
        ..BatchReport::default()
    };

    for parsed in lines {
        let line = parsed.line;
        let result = match &parsed.command {
            Ok(command) => monitor
                .apply(command)
                .map(|outcome| (command.kind(), outcome))
                .map_err(|source| BatchError::Lookup { line, source }),
            Err(source) => Err(BatchError::Parse {
                line,
                source: source.clone(),
            }),
        };

        match result {
            Ok((kind, outcome)) => {
                writeln!(sink, "{outcome}")?;
                report.count(kind);
            }
            Err(err) if policy == ErrorPolicy::Skip => {
                tracing::warn!(line, error = %err, "skipping command");
                writeln!(sink, "Error: {err}")?;
                report.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(report)
}
