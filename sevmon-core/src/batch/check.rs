use crate::batch::BatchError;
use crate::command::parse_commands;
use crate::monitor::LogMonitor;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// What the pre-pass would build for an input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub commands: usize,
    pub timestamps: usize,
    pub first_timestamp: Option<String>,
    pub last_timestamp: Option<String>,
    pub categories: Vec<String>,
}

/// Parses and pre-scans `path` without applying any command.
pub fn check_input(path: &Path) -> Result<CheckSummary> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read input {}", path.display()))?;

    let commands = parse_commands(&input)
        .map_err(|(line, source)| BatchError::Parse { line, source })
        .with_context(|| format!("invalid command in {}", path.display()))?;

    let monitor = LogMonitor::prepare(commands.iter().map(|(_, c)| c));
    let index = monitor.index();

    Ok(CheckSummary {
        commands: commands.len(),
        timestamps: index.len(),
        first_timestamp: index.timestamps().first().cloned(),
        last_timestamp: index.timestamps().last().cloned(),
        categories: monitor
            .registry()
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
