use crate::command::ParseError;
use crate::error::MonitorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("line {line}: {source}")]
    Lookup {
        line: usize,
        #[source]
        source: MonitorError,
    },

    #[error("failed to write result: {0}")]
    Write(#[from] std::io::Error),
}

impl BatchError {
    pub fn line(&self) -> Option<usize> {
        match self {
            BatchError::Parse { line, .. } | BatchError::Lookup { line, .. } => Some(*line),
            BatchError::Write(_) => None,
        }
    }
}
