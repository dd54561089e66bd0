//! Range-aggregate queries (min, max, mean) over timestamped, categorized
//! severity events.
//!
//! Timestamps are known up front: a pre-pass maps them onto a dense index
//! domain, then every event lands in a segment tree for its category and in a
//! global one, so each query is answered in logarithmic time.

pub mod batch;
pub mod command;
pub mod conf;
pub mod error;
pub mod format;
pub mod index;
pub mod logging;
pub mod monitor;
pub mod registry;
pub mod tree;

pub use error::MonitorError;
pub use monitor::{LogMonitor, Outcome};
