use crate::command::Command;
use crate::error::MonitorError;
use ahash::RandomState;
use std::collections::{BTreeSet, HashMap};

/// Bijection between the distinct timestamps of a command stream and the
/// dense index domain `[0, len)`, in ascending timestamp order.
///
/// Timestamps order by their text, which is chronological for ISO-8601 and
/// fixed-width epoch values.
#[derive(Debug, Clone, Default)]
pub struct TimestampIndex {
    sorted: Vec<String>,
    positions: HashMap<String, usize, RandomState>,
}

impl TimestampIndex {
    /// Collects every timestamp that records or relative queries mention.
    pub fn from_commands<'a, I>(commands: I) -> Self
    where
        I: IntoIterator<Item = &'a Command>,
    {
        Self::from_timestamps(commands.into_iter().filter_map(Command::timestamp))
    }

    pub fn from_timestamps<I, S>(timestamps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let distinct: BTreeSet<String> = timestamps
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .collect();
        let sorted: Vec<String> = distinct.into_iter().collect();

        let mut positions = HashMap::with_capacity_and_hasher(sorted.len(), RandomState::new());
        for (i, timestamp) in sorted.iter().enumerate() {
            positions.insert(timestamp.clone(), i);
        }

        Self { sorted, positions }
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn position(&self, timestamp: &str) -> Result<usize, MonitorError> {
        self.positions
            .get(timestamp)
            .copied()
            .ok_or_else(|| MonitorError::unknown_timestamp(timestamp))
    }

    pub fn timestamp(&self, index: usize) -> Option<&str> {
        self.sorted.get(index).map(String::as_str)
    }

    pub fn timestamps(&self) -> &[String] {
        &self.sorted
    }
}
