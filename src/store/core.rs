//! TaskStore - owns the canonical todo collection
//!
//! The store is the root of all mutation. Every change bumps a monotonic
//! version counter and publishes a fresh snapshot on a watch channel; the
//! channel's latest-value semantics coalesce rapid bursts for downstream
//! subscribers (persistence write-through, UI refresh).

use chrono::{DateTime, Duration, Utc};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::{CreateRequest, Task, UpdateRequest, generate_id};
use crate::error::CoreError;

/// Canonical ordered collection of [`Task`] entities
pub struct TaskStore {
    tasks: Vec<Task>,
    version: u64,
    loaded: bool,
    snapshot_tx: watch::Sender<Vec<Task>>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        let (snapshot_tx, _) = watch::channel(Vec::new());
        Self {
            tasks: Vec::new(),
            version: 0,
            loaded: false,
            snapshot_tx,
        }
    }

    /// Seed the collection from previously persisted tasks.
    ///
    /// May be called at most once, before any mutation; later calls are
    /// ignored. Seeding does not count as a change, so it does not trigger
    /// a persistence write-back of what was just loaded.
    pub fn load(&mut self, initial: Vec<Task>) {
        if self.loaded || self.version > 0 {
            warn!("load: store already seeded, ignoring");
            return;
        }
        debug!(count = initial.len(), "load: seeding store");
        self.tasks = initial;
        self.loaded = true;
    }

    /// Create a new task from the request and append it to the collection.
    ///
    /// Structural defaults are applied here (`completed=false`, priority
    /// medium, empty tags); semantic validation is the caller's job via
    /// [`validation`](crate::validation) before calling this.
    pub fn add(&mut self, request: CreateRequest) -> Task {
        let mut task = Task::from_request(request, Utc::now());
        // Ids carry a uuid prefix; regenerate on the off chance of an
        // in-process collision
        while self.tasks.iter().any(|t| t.id == task.id) {
            task.id = generate_id(&task.title);
        }
        debug!(id = %task.id, title = %task.title, "add: created task");
        self.tasks.push(task.clone());
        self.publish();
        task
    }

    /// Merge the provided fields onto the task with the given id.
    ///
    /// Unspecified fields are left untouched. The previous version is
    /// replaced, never mutated, so snapshots held by observers stay valid.
    pub fn update(&mut self, id: &str, request: &UpdateRequest) -> Result<Task, CoreError> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            debug!(%id, "update: task not found");
            return Err(CoreError::NotFound(id.to_string()));
        };

        let prev = &self.tasks[index];
        let mut next = prev.merged(request);
        next.updated_at = Self::advance_clock(prev.updated_at);
        debug!(%id, "update: task updated");
        self.tasks[index] = next.clone();
        self.publish();
        Ok(next)
    }

    /// Flip the completion flag of the task with the given id
    pub fn toggle(&mut self, id: &str) -> Result<Task, CoreError> {
        let completed = self
            .tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.completed)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        self.update(id, &UpdateRequest::default().completed(!completed))
    }

    /// Remove the task with the given id, reporting whether one was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() < before;
        if removed {
            debug!(%id, "remove: task removed");
            self.publish();
        } else {
            debug!(%id, "remove: task not found");
        }
        removed
    }

    /// Remove every completed task, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            debug!(removed, "clear_completed: removed tasks");
            self.publish();
        }
        removed
    }

    /// Point lookup by id
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Read-only view of the collection in insertion order
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Owned copy of the current collection
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Monotonic change counter; bumped once per logical change
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Subscribe to collection snapshots.
    ///
    /// The receiver observes the latest snapshot only: several mutations
    /// between polls collapse into a single notification.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Task>> {
        self.snapshot_tx.subscribe()
    }

    fn publish(&mut self) {
        self.version += 1;
        self.snapshot_tx.send_replace(self.tasks.clone());
    }

    /// Next updated_at, strictly greater than the previous one even when
    /// the wall clock has not advanced
    fn advance_clock(prev: DateTime<Utc>) -> DateTime<Utc> {
        let now = Utc::now();
        if now > prev { now } else { prev + Duration::microseconds(1) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;

    #[test]
    fn test_add_then_get_returns_equal_task() {
        let mut store = TaskStore::new();
        let task = store.add(CreateRequest::new("Water plants"));

        let found = store.get(&task.id).expect("task should exist");
        assert_eq!(found, &task);
        assert!(!found.completed);
        assert_eq!(found.priority, Priority::Medium);
        assert!(found.tags.is_empty());
    }

    #[test]
    fn test_duplicate_titles_get_distinct_ids() {
        let mut store = TaskStore::new();
        // Same title in the same instant must neither collide nor stall
        let a = store.add(CreateRequest::new("same title"));
        let b = store.add(CreateRequest::new("same title"));
        let c = store.add(CreateRequest::new("same title"));

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
        assert_eq!(store.all().len(), 3);
    }

    #[test]
    fn test_load_seeds_once() {
        let mut store = TaskStore::new();
        let seed = vec![Task::from_request(CreateRequest::new("Seeded"), Utc::now())];
        store.load(seed.clone());
        assert_eq!(store.all().len(), 1);

        // Second load is ignored
        store.load(vec![]);
        assert_eq!(store.all().len(), 1);
        // Seeding is not a change
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_load_after_mutation_is_ignored() {
        let mut store = TaskStore::new();
        store.add(CreateRequest::new("First"));
        store.load(vec![]);
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn test_update_merges_and_advances_updated_at() {
        let mut store = TaskStore::new();
        let task = store.add(CreateRequest::new("Original"));

        let updated = store
            .update(&task.id, &UpdateRequest::default().title("Renamed"))
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.created_at, task.created_at);
        assert!(updated.updated_at > task.updated_at);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn test_update_not_found_leaves_collection_unchanged() {
        let mut store = TaskStore::new();
        store.add(CreateRequest::new("Only one"));
        let before = store.snapshot();
        let version = store.version();

        let result = store.update("missing-id", &UpdateRequest::default().title("x"));
        assert_eq!(result, Err(CoreError::NotFound("missing-id".to_string())));
        assert_eq!(store.all(), &before[..]);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn test_update_does_not_reorder() {
        let mut store = TaskStore::new();
        let a = store.add(CreateRequest::new("A"));
        let b = store.add(CreateRequest::new("B"));
        let c = store.add(CreateRequest::new("C"));

        store.update(&b.id, &UpdateRequest::default().completed(true)).unwrap();

        let order: Vec<&str> = store.all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec![a.id.as_str(), b.id.as_str(), c.id.as_str()]);
    }

    #[test]
    fn test_toggle_flips_completed() {
        let mut store = TaskStore::new();
        let task = store.add(CreateRequest::new("Toggle me"));

        let toggled = store.toggle(&task.id).unwrap();
        assert!(toggled.completed);

        let toggled = store.toggle(&task.id).unwrap();
        assert!(!toggled.completed);
    }

    #[test]
    fn test_toggle_not_found() {
        let mut store = TaskStore::new();
        assert!(matches!(store.toggle("nope"), Err(CoreError::NotFound(_))));
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut store = TaskStore::new();
        let a = store.add(CreateRequest::new("A"));
        let b = store.add(CreateRequest::new("B"));
        let c = store.add(CreateRequest::new("C"));

        assert!(store.remove(&b.id));
        assert!(!store.remove(&b.id));

        let order: Vec<&str> = store.all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec![a.id.as_str(), c.id.as_str()]);
    }

    #[test]
    fn test_clear_completed() {
        let mut store = TaskStore::new();
        let a = store.add(CreateRequest::new("A"));
        let b = store.add(CreateRequest::new("B"));
        store.add(CreateRequest::new("C"));
        store.toggle(&a.id).unwrap();
        store.toggle(&b.id).unwrap();

        assert_eq!(store.clear_completed(), 2);
        assert_eq!(store.all().len(), 1);
        assert_eq!(store.all()[0].title, "C");

        // Nothing completed left; no version bump
        let version = store.version();
        assert_eq!(store.clear_completed(), 0);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn test_version_bumps_once_per_change() {
        let mut store = TaskStore::new();
        assert_eq!(store.version(), 0);

        let task = store.add(CreateRequest::new("A"));
        assert_eq!(store.version(), 1);

        store.toggle(&task.id).unwrap();
        assert_eq!(store.version(), 2);

        store.remove(&task.id);
        assert_eq!(store.version(), 3);

        // Failed operations do not bump
        assert!(!store.remove(&task.id));
        assert_eq!(store.version(), 3);
    }

    #[test]
    fn test_subscribe_sees_latest_snapshot_only() {
        let mut store = TaskStore::new();
        let mut rx = store.subscribe();

        store.add(CreateRequest::new("A"));
        store.add(CreateRequest::new("B"));
        store.add(CreateRequest::new("C"));

        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.len(), 3);
        // Burst coalesced into one pending notification
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_advance_clock_is_strictly_monotonic() {
        let now = Utc::now();
        let future = now + Duration::seconds(60);
        let advanced = TaskStore::advance_clock(future);
        assert!(advanced > future);
    }

    #[test]
    fn test_prior_snapshot_unchanged_by_update() {
        let mut store = TaskStore::new();
        let task = store.add(CreateRequest::new("Snapshot"));
        let before = store.snapshot();

        store.update(&task.id, &UpdateRequest::default().title("Changed")).unwrap();

        assert_eq!(before[0].title, "Snapshot");
        assert_eq!(store.all()[0].title, "Changed");
    }
}
