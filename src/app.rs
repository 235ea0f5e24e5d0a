//! Composition root and Renderer-facing command layer
//!
//! `TodoApp` explicitly wires the store, statistics, persistence, feedback,
//! and confirmation components together once at startup; there is no global
//! registry. A Renderer issues commands here and reads state back; the only
//! failures it ever sees are typed [`CoreError`] results.

use tracing::info;

use crate::confirm::{ConfirmPrompt, ConfirmationGateway};
use crate::domain::{CreateRequest, Task, UpdateRequest};
use crate::error::{self, CoreError};
use crate::feedback::FeedbackManager;
use crate::persist::{KeyValueBackend, PersistenceSync, StorageAdapter, StorageHealth};
use crate::store::{StatsEngine, TaskStats, TaskStore};
use crate::validation;

pub struct TodoApp<B: KeyValueBackend, P: ConfirmPrompt> {
    store: TaskStore,
    stats: StatsEngine,
    feedback: FeedbackManager,
    gateway: ConfirmationGateway<P>,
    adapter: StorageAdapter<B>,
    // Held for its Drop: aborting it stops the write-through task
    _sync: PersistenceSync,
}

impl<B, P> TodoApp<B, P>
where
    B: KeyValueBackend + Clone,
    P: ConfirmPrompt,
{
    /// Wire the core together: seed the store from persistence and start
    /// the write-through synchronizer. Must run inside a tokio runtime.
    pub fn new(backend: B, prompt: P) -> Self {
        let adapter = StorageAdapter::new(backend);
        let mut store = TaskStore::new();
        store.load(adapter.load_all());
        info!(count = store.all().len(), "todo core initialized");

        let sync = PersistenceSync::spawn(adapter.clone(), store.subscribe());
        Self {
            store,
            stats: StatsEngine::new(),
            feedback: FeedbackManager::new(),
            gateway: ConfirmationGateway::new(prompt),
            adapter,
            _sync: sync,
        }
    }

    /// Create a todo after validating the request
    pub fn add_todo(&mut self, request: CreateRequest) -> Result<Task, CoreError> {
        if let Err(violations) = validation::validate_create(&request) {
            error::handle_validation(&violations, "app.add_todo");
            self.feedback.set_error(violations.join("; "));
            return Err(CoreError::Validation(violations));
        }
        let task = self.store.add(request);
        self.feedback.set_success("Todo added");
        Ok(task)
    }

    /// Merge fields onto an existing todo after validating the request
    pub fn update_todo(&mut self, id: &str, request: &UpdateRequest) -> Result<Task, CoreError> {
        if let Err(violations) = validation::validate_update(request) {
            error::handle_validation(&violations, "app.update_todo");
            self.feedback.set_error(violations.join("; "));
            return Err(CoreError::Validation(violations));
        }
        match self.store.update(id, request) {
            Ok(task) => {
                self.feedback.set_success("Todo updated");
                Ok(task)
            }
            Err(e) => {
                error::handle_not_found(id, "app.update_todo");
                self.feedback.set_error("Todo not found");
                Err(e)
            }
        }
    }

    /// Flip a todo's completion flag
    pub fn toggle_todo(&mut self, id: &str) -> Result<Task, CoreError> {
        match self.store.toggle(id) {
            Ok(task) => {
                self.feedback.set_success("Todo updated");
                Ok(task)
            }
            Err(e) => {
                error::handle_not_found(id, "app.toggle_todo");
                self.feedback.set_error("Todo not found");
                Err(e)
            }
        }
    }

    /// Delete a todo behind the confirmation gate.
    ///
    /// Returns whether a removal occurred; a declined (or failed) prompt
    /// aborts the operation as if the user said no.
    pub fn remove_todo(&mut self, id: &str) -> bool {
        let title = self.store.get(id).map(|t| t.title.clone());
        if !self.gateway.confirm_delete_todo(title.as_deref()) {
            return false;
        }
        if self.store.remove(id) {
            self.feedback.set_success("Todo deleted");
            true
        } else {
            error::handle_not_found(id, "app.remove_todo");
            self.feedback.set_error("Todo not found");
            false
        }
    }

    /// Delete every completed todo behind the confirmation gate; returns
    /// how many were removed
    pub fn clear_completed(&mut self) -> usize {
        if !self.gateway.confirm(Some("Are you sure you want to delete all completed todos?")) {
            return 0;
        }
        let removed = self.store.clear_completed();
        if removed > 0 {
            self.feedback.set_success("Completed todos deleted");
        }
        removed
    }

    /// All todos in insertion order
    pub fn todos(&self) -> &[Task] {
        self.store.all()
    }

    /// Point lookup by id
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.store.get(id)
    }

    /// Derived statistics, recomputed only when the collection changed
    pub fn stats(&mut self) -> TaskStats {
        self.stats.stats(&self.store)
    }

    /// Availability and error state of the persistence layer
    pub fn storage_health(&self) -> StorageHealth {
        self.adapter.health()
    }

    pub fn feedback(&self) -> &FeedbackManager {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut FeedbackManager {
        &mut self.feedback
    }
}
