//! todostore - reactive state core for a task-list application
//!
//! Owns the authoritative in-memory todo collection, derives live statistics
//! from it, persists it through a narrow key-value interface, and manages
//! short-lived user-feedback state with timed expiry. Rendering, routing and
//! other UI plumbing are external collaborators: a Renderer issues commands
//! through [`TodoApp`] and reads state back.
//!
//! # Core Concepts
//!
//! - **Single mutation root**: every change goes through [`TaskStore`],
//!   which bumps a version counter and publishes a snapshot
//! - **Pull-based derivation**: [`StatsEngine`] memoizes against the store
//!   version and recomputes only on change
//! - **Decoupled persistence**: [`PersistenceSync`] writes the latest
//!   snapshot on a later scheduler turn; mutating callers never block on I/O
//! - **Absorbed infrastructure faults**: persistence, confirmation and
//!   logging failures become safe defaults, never escaped errors
//!
//! # Modules
//!
//! - [`domain`] - `Task` entity, priority, mutation requests
//! - [`store`] - canonical collection and derived statistics
//! - [`persist`] - key-value backends, storage adapter, write-through sync
//! - [`feedback`] - transient error/success/loading state
//! - [`validation`] - pure request validation
//! - [`confirm`] - confirmation gateway over the external prompt
//! - [`error`] - error taxonomy and classifier logging
//! - [`app`] - composition root wiring everything together

pub mod app;
pub mod confirm;
pub mod domain;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod persist;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use app::TodoApp;
pub use confirm::{ConfirmPrompt, ConfirmationGateway};
pub use domain::{CreateRequest, Priority, Task, UpdateRequest};
pub use error::CoreError;
pub use feedback::{FeedbackManager, SUCCESS_TTL};
pub use persist::{FileBackend, KeyValueBackend, MemoryBackend, PersistenceSync, STORAGE_KEY, StorageAdapter, StorageHealth};
pub use store::{PriorityCounts, StatsEngine, TaskStats, TaskStore};
