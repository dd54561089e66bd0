use crate::command::ParseError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Before,
    After,
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEFORE" => Ok(Direction::Before),
            "AFTER" => Ok(Direction::After),
            other => Err(ParseError::InvalidDirection {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Before => f.write_str("BEFORE"),
            Direction::After => f.write_str("AFTER"),
        }
    }
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `1 <timestamp>;<category>;<severity>`
    Record {
        timestamp: String,
        category: String,
        severity: f64,
    },
    /// `2 <category>`
    CategorySummary { category: String },
    /// `3 <BEFORE|AFTER> <timestamp>`
    GlobalRelative {
        direction: Direction,
        timestamp: String,
    },
    /// `4 <BEFORE|AFTER> <category> <timestamp>`
    CategoryRelative {
        direction: Direction,
        category: String,
        timestamp: String,
    },
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Record { .. } => CommandKind::Record,
            Command::CategorySummary { .. } => CommandKind::CategorySummary,
            Command::GlobalRelative { .. } => CommandKind::GlobalRelative,
            Command::CategoryRelative { .. } => CommandKind::CategoryRelative,
        }
    }

    /// The timestamp this command pins into the index space, if any.
    pub fn timestamp(&self) -> Option<&str> {
        match self {
            Command::Record { timestamp, .. }
            | Command::GlobalRelative { timestamp, .. }
            | Command::CategoryRelative { timestamp, .. } => Some(timestamp),
            Command::CategorySummary { .. } => None,
        }
    }

    /// The category this command names, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            Command::Record { category, .. }
            | Command::CategorySummary { category }
            | Command::CategoryRelative { category, .. } => Some(category),
            Command::GlobalRelative { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Record,
    CategorySummary,
    GlobalRelative,
    CategoryRelative,
}

impl CommandKind {
    pub fn code(&self) -> char {
        match self {
            CommandKind::Record => '1',
            CommandKind::CategorySummary => '2',
            CommandKind::GlobalRelative => '3',
            CommandKind::CategoryRelative => '4',
        }
    }
}
