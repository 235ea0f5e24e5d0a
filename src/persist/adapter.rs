//! Storage adapter between the todo collection and the key-value backend
//!
//! Translates the collection to/from its persisted JSON form under a fixed
//! key. The adapter never raises: any underlying fault is caught, recorded
//! for the next `health()` call, logged once through the error classifier,
//! and replaced by a safe default (`[]` for loads, no-op for writes).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::Task;
use crate::error;

use super::backend::KeyValueBackend;

/// Fixed key identifying the persisted record in the backend
pub const STORAGE_KEY: &str = "todos";

/// Snapshot of the persistence layer's condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageHealth {
    /// Whether the backend can currently be reached
    pub available: bool,
    /// Whether a fault has been recorded since construction
    pub has_error: bool,
}

/// Adapter over a [`KeyValueBackend`]; clones share the error flag so the
/// composition root can read `health()` while the synchronizer writes
#[derive(Debug, Clone)]
pub struct StorageAdapter<B> {
    backend: B,
    has_error: Arc<AtomicBool>,
}

impl<B: KeyValueBackend> StorageAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            has_error: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Load the persisted collection, or `[]` on any fault.
    ///
    /// Decoding is best-effort: records that no longer deserialize are
    /// skipped rather than failing the whole load.
    pub fn load_all(&self) -> Vec<Task> {
        if !self.backend.is_available() {
            self.record_fault("storage backend unavailable", "storage.load_all");
            return Vec::new();
        }

        let payload = match self.backend.get(STORAGE_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!("load_all: no persisted record");
                return Vec::new();
            }
            Err(e) => {
                self.record_fault(e, "storage.load_all");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&payload) {
            Ok(Value::Array(entries)) => {
                let total = entries.len();
                let tasks: Vec<Task> = entries
                    .into_iter()
                    .filter_map(|entry| serde_json::from_value(entry).ok())
                    .collect();
                if tasks.len() < total {
                    warn!(
                        skipped = total - tasks.len(),
                        "load_all: skipped undecodable records"
                    );
                }
                debug!(count = tasks.len(), "load_all: loaded tasks");
                tasks
            }
            Ok(_) => {
                self.record_fault("persisted record is not an array", "storage.load_all");
                Vec::new()
            }
            Err(e) => {
                self.record_fault(e, "storage.load_all");
                Vec::new()
            }
        }
    }

    /// Persist the full collection; a fault is absorbed and recorded
    pub fn save_all(&self, tasks: &[Task]) {
        if !self.backend.is_available() {
            self.record_fault("storage backend unavailable", "storage.save_all");
            return;
        }
        let payload = match serde_json::to_string(tasks) {
            Ok(payload) => payload,
            Err(e) => {
                self.record_fault(e, "storage.save_all");
                return;
            }
        };
        if let Err(e) = self.backend.set(STORAGE_KEY, &payload) {
            self.record_fault(e, "storage.save_all");
        } else {
            debug!(count = tasks.len(), "save_all: persisted tasks");
        }
    }

    /// Remove the persisted record; a fault is absorbed and recorded
    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(STORAGE_KEY) {
            self.record_fault(e, "storage.clear");
        }
    }

    /// Whether the backend can currently be reached
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Availability plus whether any fault has been recorded
    pub fn health(&self) -> StorageHealth {
        StorageHealth {
            available: self.backend.is_available(),
            has_error: self.has_error.load(Ordering::Relaxed),
        }
    }

    fn record_fault(&self, fault: impl std::fmt::Display, context: &str) {
        self.has_error.store(true, Ordering::Relaxed);
        error::handle(fault, context);
    }
}
