//! Transient user-feedback state
//!
//! Three independent pieces of UI state: an error message, a success message
//! with timed auto-expiry, and a loading flag. Error and success are mutually
//! exclusive; at most one expiry timer is live at any time. The timer is a
//! spawned tokio task whose `JoinHandle` doubles as the cancellation handle,
//! with a generation counter guarding against a stale timer clearing a
//! message that already replaced its own.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// How long a success message stays visible
pub const SUCCESS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
struct FeedbackState {
    error: Option<String>,
    success: Option<String>,
    loading: bool,
    /// Bumped on every message change; a timer only clears the success
    /// message it was started for
    generation: u64,
}

/// Owner of the transient feedback state
pub struct FeedbackManager {
    state: Arc<Mutex<FeedbackState>>,
    expiry: Option<JoinHandle<()>>,
    ttl: Duration,
}

impl Default for FeedbackManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackManager {
    pub fn new() -> Self {
        Self::with_ttl(SUCCESS_TTL)
    }

    /// Manager with a custom success expiry, for embedders and tests
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(FeedbackState::default())),
            expiry: None,
            ttl,
        }
    }

    /// Show an error message, clearing any success message and cancelling
    /// its pending expiry
    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "set_error");
        self.cancel_expiry();
        let mut state = self.lock();
        state.generation += 1;
        state.error = Some(message);
        state.success = None;
    }

    /// Show a success message, clearing any error and restarting the expiry
    pub fn set_success(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "set_success");
        self.cancel_expiry();

        let generation = {
            let mut state = self.lock();
            state.generation += 1;
            state.success = Some(message);
            state.error = None;
            state.generation
        };

        let shared = Arc::clone(&self.state);
        let ttl = self.ttl;
        self.expiry = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut state = shared.lock().expect("feedback state poisoned");
            if state.generation == generation {
                debug!("success message expired");
                state.success = None;
            }
        }));
    }

    /// Set the loading flag; independent of the message pair
    pub fn set_loading(&mut self, loading: bool) {
        self.lock().loading = loading;
    }

    /// Clear both messages and cancel any pending expiry
    pub fn clear(&mut self) {
        debug!("clear");
        self.cancel_expiry();
        let mut state = self.lock();
        state.generation += 1;
        state.error = None;
        state.success = None;
    }

    pub fn error_message(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn success_message(&self) -> Option<String> {
        self.lock().success.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    fn cancel_expiry(&mut self) {
        if let Some(handle) = self.expiry.take() {
            handle.abort();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FeedbackState> {
        self.state.lock().expect("feedback state poisoned")
    }
}

impl Drop for FeedbackManager {
    fn drop(&mut self) {
        self.cancel_expiry();
    }
}
