//! Task entity and mutation requests
//!
//! `Task` is the canonical todo record owned by the
//! [`TaskStore`](crate::store::TaskStore). Field names serialize in camelCase
//! with ISO-8601 dates so payloads written by earlier builds of the
//! application still deserialize.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::id::generate_id;
use super::priority::Priority;

/// A single todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, immutable after creation
    pub id: String,

    /// Human-readable title, non-empty after trimming
    pub title: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Completion flag
    pub completed: bool,

    /// Priority for display ordering
    pub priority: Priority,

    /// Due calendar day (no time-of-day semantics)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Ordered tag list
    #[serde(default)]
    pub tags: Vec<String>,

    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp, always >= created_at
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new Task from a creation request, applying defaults
    pub fn from_request(request: CreateRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_id(&request.title),
            title: request.title,
            description: request.description,
            completed: false,
            priority: request.priority.unwrap_or_default(),
            due_date: request.due_date,
            tags: request.tags.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Build the successor version of this task with the requested fields
    /// merged in. The receiver is left untouched so prior snapshots stay
    /// valid; `updated_at` is the caller's responsibility.
    pub fn merged(&self, request: &UpdateRequest) -> Self {
        let mut next = self.clone();
        if let Some(title) = &request.title {
            next.title = title.clone();
        }
        if let Some(description) = &request.description {
            next.description = Some(description.clone());
        }
        if let Some(completed) = request.completed {
            next.completed = completed;
        }
        if let Some(priority) = request.priority {
            next.priority = priority;
        }
        if let Some(due_date) = request.due_date {
            next.due_date = Some(due_date);
        }
        if let Some(tags) = &request.tags {
            next.tags = tags.clone();
        }
        next
    }
}

/// Request to create a new Task
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl CreateRequest {
    /// Create a request with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Request to update an existing Task. `None` fields are left unchanged;
/// `id` and `created_at` are never updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl UpdateRequest {
    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the completion flag
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Set the priority
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the due date
    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the tags
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}
