use crate::format::{NO_OUTPUT, render_summary};
use crate::tree::Summary;
use std::fmt;

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Recorded,
    Summary(Summary),
}

impl Outcome {
    pub fn summary(&self) -> Option<&Summary> {
        match self {
            Outcome::Recorded => None,
            Outcome::Summary(summary) => Some(summary),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Recorded => f.write_str(NO_OUTPUT),
            Outcome::Summary(summary) => f.write_str(&render_summary(summary)),
        }
    }
}
