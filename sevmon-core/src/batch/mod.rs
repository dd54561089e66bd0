//! Batch pipeline
//!
//! Reads a whole command file, sizes the index space with one pre-pass, then
//! replays the commands in order and writes exactly one line per command to
//! the output sink.
//!
//! input file
//! read_commands
//! ParsedLine
//! LogMonitor::prepare (pre-pass)
//! process (replay)
//! output sink
//!

mod check;
mod error;
mod process;
mod report;
mod run;

#[cfg(test)]
mod tests;

pub use check::{CheckSummary, check_input};
pub use error::BatchError;
pub use process::{ParsedLine, process, read_commands};
pub use report::BatchReport;
pub use run::run_batch;
