//! Command routing.
//!
//! A [`LogMonitor`] owns the timestamp index and the category registry, both
//! sized by a pre-pass over the whole command stream. It then applies commands
//! one at a time, strictly in input order:
//!
//! Command
//! LogMonitor::apply
//! CategoryRegistry (record) | RangeAggregateTree::query (summaries)
//! Outcome
//! render

mod outcome;
mod router;


pub use outcome::Outcome;
pub use router::{EventRecord, LogMonitor};
