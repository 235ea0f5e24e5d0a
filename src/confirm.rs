//! Confirmation gateway
//!
//! Wraps the external yes/no prompt behind a boolean contract. Any fault in
//! the prompt mechanism is caught, logged, and treated as "not confirmed":
//! a broken prompt must never let a destructive operation proceed.

use eyre::Result;
use tracing::debug;

use crate::error;

const GENERIC_DELETE: &str = "Are you sure you want to delete this item?";
const GENERIC_TODO_DELETE: &str = "Are you sure you want to delete this todo?";

/// External human-confirmation boundary: one synchronous call that may fail
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Gateway in front of a [`ConfirmPrompt`]
pub struct ConfirmationGateway<P> {
    prompt: P,
}

impl<P: ConfirmPrompt> ConfirmationGateway<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    /// Ask for confirmation, defaulting to a generic deletion prompt
    pub fn confirm(&self, message: Option<&str>) -> bool {
        let message = message.unwrap_or(GENERIC_DELETE);
        self.ask(message)
    }

    /// Ask for confirmation before deleting a todo, quoting its title when
    /// one is available
    pub fn confirm_delete_todo(&self, title: Option<&str>) -> bool {
        let message = match title.map(str::trim) {
            Some(title) if !title.is_empty() => {
                format!("Are you sure you want to delete \"{}\"?", title)
            }
            _ => GENERIC_TODO_DELETE.to_string(),
        };
        self.ask(&message)
    }

    fn ask(&self, message: &str) -> bool {
        match self.prompt.confirm(message) {
            Ok(confirmed) => {
                debug!(%message, confirmed, "confirmation prompt answered");
                confirmed
            }
            Err(e) => {
                error::handle(e, "confirm");
                false
            }
        }
    }
}
