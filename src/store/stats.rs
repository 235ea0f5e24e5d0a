//! Derived statistics over the todo collection
//!
//! Pull-based and memoized: the engine caches the stats together with the
//! store version they were computed from and recomputes only when the
//! version has moved. It holds no state of its own beyond that cache.
//!
//! Overdue policy: local wall-clock calendar day. A pending task is overdue
//! iff its due day has fully elapsed, i.e. today (local) is strictly after
//! `due_date`. A task due today is not overdue until the day rolls over, and
//! completed tasks are never overdue.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::domain::{Priority, Task};

use super::core::TaskStore;

/// Counts per priority level, spanning completed and pending tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Aggregated statistics derived from the current collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    /// Total number of tasks
    pub total: usize,
    /// Tasks with `completed == true`
    pub completed: usize,
    /// Tasks still open (`total - completed`)
    pub pending: usize,
    /// Pending tasks whose due day has fully elapsed
    pub overdue: usize,
    /// Priority breakdown across all tasks
    pub by_priority: PriorityCounts,
}

/// Memoized statistics derivation
#[derive(Debug, Default)]
pub struct StatsEngine {
    cached: Option<(u64, TaskStats)>,
}

impl StatsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current statistics, recomputed only when the store has changed
    pub fn stats(&mut self, store: &TaskStore) -> TaskStats {
        let version = store.version();
        if let Some((seen, stats)) = self.cached
            && seen == version
        {
            return stats;
        }
        debug!(version, "stats: recomputing");
        let stats = compute(store.all(), Local::now().date_naive());
        self.cached = Some((version, stats));
        stats
    }
}

/// Compute statistics for a collection as of the given local calendar day
pub fn compute(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let mut stats = TaskStats::default();
    for task in tasks {
        stats.total += 1;
        if task.completed {
            stats.completed += 1;
        } else if task.due_date.is_some_and(|due| today > due) {
            stats.overdue += 1;
        }
        match task.priority {
            Priority::Low => stats.by_priority.low += 1,
            Priority::Medium => stats.by_priority.medium += 1,
            Priority::High => stats.by_priority.high += 1,
        }
    }
    stats.pending = stats.total - stats.completed;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CreateRequest;
    use chrono::Utc;

    fn task(title: &str) -> Task {
        Task::from_request(CreateRequest::new(title), Utc::now())
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_collection_is_all_zero() {
        let stats = compute(&[], date("2026-08-23"));
        assert_eq!(stats, TaskStats::default());
    }

    #[test]
    fn test_pending_is_total_minus_completed() {
        let mut a = task("A");
        a.completed = true;
        let stats = compute(&[a, task("B"), task("C")], date("2026-08-23"));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
    }

    #[test]
    fn test_overdue_counts_only_elapsed_due_days() {
        let today = date("2026-08-23");

        let mut yesterday = task("yesterday");
        yesterday.due_date = Some(date("2026-08-22"));
        let mut due_today = task("today");
        due_today.due_date = Some(today);
        let mut tomorrow = task("tomorrow");
        tomorrow.due_date = Some(date("2026-08-24"));
        let no_due = task("none");

        let stats = compute(&[yesterday, due_today, tomorrow, no_due], today);
        assert_eq!(stats.overdue, 1);
    }

    #[test]
    fn test_completed_task_is_never_overdue() {
        let mut done = task("done long ago");
        done.due_date = Some(date("2020-01-01"));
        done.completed = true;

        let stats = compute(&[done], date("2026-08-23"));
        assert_eq!(stats.overdue, 0);
        assert_eq!(stats.completed, 1);
    }

    #[test]
    fn test_by_priority_spans_completed_and_pending() {
        let mut low = task("low");
        low.priority = Priority::Low;
        low.completed = true;
        let mut high = task("high");
        high.priority = Priority::High;

        let stats = compute(&[low, high, task("medium")], date("2026-08-23"));
        assert_eq!(stats.by_priority.low, 1);
        assert_eq!(stats.by_priority.medium, 1);
        assert_eq!(stats.by_priority.high, 1);
    }

    #[test]
    fn test_engine_memoizes_until_version_changes() {
        let mut store = TaskStore::new();
        let mut engine = StatsEngine::new();

        store.add(CreateRequest::new("A"));
        let first = engine.stats(&store);
        assert_eq!(first.total, 1);

        // Same version, cached value returned
        assert_eq!(engine.stats(&store), first);

        store.add(CreateRequest::new("B"));
        let second = engine.stats(&store);
        assert_eq!(second.total, 2);
    }
}
