use thiserror::Error;

/// Lookup failures raised while routing a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonitorError {
    #[error("unknown timestamp '{timestamp}'")]
    UnknownTimestamp { timestamp: String },

    #[error("unknown category '{category}'")]
    UnknownCategory { category: String },
}

impl MonitorError {
    pub fn unknown_timestamp(timestamp: impl Into<String>) -> Self {
        Self::UnknownTimestamp {
            timestamp: timestamp.into(),
        }
    }

    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }
}
