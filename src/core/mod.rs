pub mod group;
pub mod pipeline;
pub mod preview;
pub mod reconcile;

pub use group::{DayEntries, GroupedMessages, SenderDays, group_messages};
pub use pipeline::{RunSummary, run_report};
pub use reconcile::{Reconciled, reconcile};
