use crate::batch::{BatchReport, process, read_commands};
use crate::conf::MonitorConfig;
use crate::monitor::LogMonitor;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::time::Instant;

/// Runs one command file end to end as described by `cfg`.
///
/// Results are collected in memory and the output file is only opened once
/// every command has been handled, so an aborted batch leaves it untouched.
pub fn run_batch(cfg: &MonitorConfig) -> Result<BatchReport> {
    let started = Instant::now();

    let input = fs::read_to_string(&cfg.input)
        .with_context(|| format!("failed to read input {}", cfg.input.display()))?;

    let lines = read_commands(&input, cfg.on_error)?;
    let mut monitor = LogMonitor::prepare(lines.iter().filter_map(|l| l.command.as_ref().ok()));

    let mut rendered = Vec::new();
    let report = process(&lines, &mut monitor, &mut rendered, cfg.on_error)?;

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(cfg.append)
        .truncate(!cfg.append)
        .open(&cfg.output)
        .with_context(|| format!("failed to open output {}", cfg.output.display()))?;
    file.write_all(&rendered)
        .with_context(|| format!("failed to write output {}", cfg.output.display()))?;

    tracing::info!(
        input = %cfg.input.display(),
        output = %cfg.output.display(),
        lines = report.lines(),
        skipped = report.skipped,
        timestamps = report.timestamps,
        categories = report.categories,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "batch complete"
    );

    Ok(report)
}
