use crate::command::{Command, Direction};
use crate::error::MonitorError;
use crate::index::TimestampIndex;
use crate::monitor::Outcome;
use crate::registry::CategoryRegistry;
use crate::tree::{Aggregate, RangeAggregateTree, Summary};

/// An applied record, kept in arrival order for auditing. Queries never read
/// it; the trees are authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub index: usize,
    pub category: String,
    pub severity: f64,
}

pub struct LogMonitor {
    index: TimestampIndex,
    registry: CategoryRegistry,
    events: Vec<EventRecord>,
}

impl LogMonitor {
    /// # Panics
    ///
    /// Panics if the registry trees are not sized to the index domain.
    pub fn new(index: TimestampIndex, registry: CategoryRegistry) -> Self {
        assert_eq!(
            index.len(),
            registry.capacity(),
            "registry capacity must match the timestamp index"
        );

        Self {
            index,
            registry,
            events: Vec::new(),
        }
    }

    /// Sizes the index domain and registers categories from the full command
    /// stream. Tree capacity cannot grow later, so this must see every command
    /// before any of them is applied.
    pub fn prepare<'a, I>(commands: I) -> Self
    where
        I: IntoIterator<Item = &'a Command>,
    {
        let commands: Vec<&Command> = commands.into_iter().collect();
        let index = TimestampIndex::from_commands(commands.iter().copied());
        let registry = CategoryRegistry::from_commands(index.len(), commands.iter().copied());

        tracing::debug!(
            commands = commands.len(),
            timestamps = index.len(),
            categories = registry.len(),
            "index space prepared"
        );

        Self::new(index, registry)
    }

    pub fn apply(&mut self, command: &Command) -> Result<Outcome, MonitorError> {
        match command {
            Command::Record {
                timestamp,
                category,
                severity,
            } => {
                self.record(timestamp, category, *severity)?;
                Ok(Outcome::Recorded)
            }
            Command::CategorySummary { category } => {
                self.category_summary(category).map(Outcome::Summary)
            }
            Command::GlobalRelative {
                direction,
                timestamp,
            } => self.global_relative(*direction, timestamp).map(Outcome::Summary),
            Command::CategoryRelative {
                direction,
                category,
                timestamp,
            } => self
                .category_relative(*direction, category, timestamp)
                .map(Outcome::Summary),
        }
    }

    pub fn record(&mut self, timestamp: &str, category: &str, severity: f64) -> Result<(), MonitorError> {
        let index = self.index.position(timestamp)?;
        self.registry.record(category, index, severity)?;

        self.events.push(EventRecord {
            index,
            category: category.to_string(),
            severity,
        });
        Ok(())
    }

    pub fn category_summary(&self, category: &str) -> Result<Summary, MonitorError> {
        let tree = self.registry.tree_for(category)?;
        Ok(tree.total().summary())
    }

    pub fn global_relative(&self, direction: Direction, timestamp: &str) -> Result<Summary, MonitorError> {
        let anchor = self.index.position(timestamp)?;
        Ok(relative(self.registry.global_tree(), direction, anchor).summary())
    }

    pub fn category_relative(
        &self,
        direction: Direction,
        category: &str,
        timestamp: &str,
    ) -> Result<Summary, MonitorError> {
        let tree = self.registry.tree_for(category)?;
        let anchor = self.index.position(timestamp)?;
        Ok(relative(tree, direction, anchor).summary())
    }

    pub fn index(&self) -> &TimestampIndex {
        &self.index
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }
}

/// Strictly before or strictly after `anchor`; the anchor itself is excluded.
fn relative(tree: &RangeAggregateTree, direction: Direction, anchor: usize) -> Aggregate {
    match direction {
        Direction::Before => match anchor.checked_sub(1) {
            Some(right) => tree.query(0, right),
            None => Aggregate::EMPTY,
        },
        Direction::After => tree.query(anchor + 1, tree.len().saturating_sub(1)),
    }
}
