//! Canonical collection and derived statistics

mod core;
mod stats;

pub use self::core::TaskStore;
pub use stats::{PriorityCounts, StatsEngine, TaskStats, compute};
