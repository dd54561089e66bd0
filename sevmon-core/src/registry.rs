use crate::command::Command;
use crate::error::MonitorError;
use crate::tree::{Aggregate, RangeAggregateTree};
use ahash::RandomState;
use std::collections::HashMap;

/// One aggregation tree per category plus a global tree over every category,
/// all sized to the same index domain.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    capacity: usize,
    trees: HashMap<String, RangeAggregateTree, RandomState>,
    global: RangeAggregateTree,
}

impl CategoryRegistry {
    /// Registers every category that records or category queries mention.
    pub fn from_commands<'a, I>(capacity: usize, commands: I) -> Self
    where
        I: IntoIterator<Item = &'a Command>,
    {
        Self::new(capacity, commands.into_iter().filter_map(Command::category))
    }

    pub fn new<I, S>(capacity: usize, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trees = HashMap::with_hasher(RandomState::new());
        for category in categories {
            trees
                .entry(category.as_ref().to_string())
                .or_insert_with(|| RangeAggregateTree::new(capacity));
        }

        Self {
            capacity,
            trees,
            global: RangeAggregateTree::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Sorted category names.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.trees.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Applies one event to its category tree and the global tree.
    pub fn record(&mut self, category: &str, index: usize, severity: f64) -> Result<(), MonitorError> {
        let tree = self
            .trees
            .get_mut(category)
            .ok_or_else(|| MonitorError::unknown_category(category))?;

        tree.update(index, severity);
        self.global.update(index, severity);
        Ok(())
    }

    pub fn tree_for(&self, category: &str) -> Result<&RangeAggregateTree, MonitorError> {
        self.trees
            .get(category)
            .ok_or_else(|| MonitorError::unknown_category(category))
    }

    pub fn global_tree(&self) -> &RangeAggregateTree {
        &self.global
    }

    /// Merge of every category's full-range aggregate.
    pub fn combined(&self) -> Aggregate {
        self.trees
            .values()
            .fold(Aggregate::EMPTY, |acc, tree| acc.merge(&tree.total()))
    }
}
