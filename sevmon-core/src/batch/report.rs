use crate::command::CommandKind;
use serde::Serialize;

/// Counters for one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub timestamps: usize,
    pub categories: usize,
    pub records: usize,
    pub category_summaries: usize,
    pub global_queries: usize,
    pub category_queries: usize,
    pub skipped: usize,
}

impl BatchReport {
    pub(crate) fn count(&mut self, kind: CommandKind) {
        match kind {
            CommandKind::Record => self.records += 1,
            CommandKind::CategorySummary => self.category_summaries += 1,
            CommandKind::GlobalRelative => self.global_queries += 1,
            CommandKind::CategoryRelative => self.category_queries += 1,
        }
    }

    /// Lines written, including skipped commands.
    pub fn lines(&self) -> usize {
        self.records
            + self.category_summaries
            + self.global_queries
            + self.category_queries
            + self.skipped
    }
}
