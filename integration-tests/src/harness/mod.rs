mod fixtures;
pub mod tracing;

pub use fixtures::{Workspace, fixture};
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
