//! Pure request validation
//!
//! Classifies create/update requests as valid or produces an ordered list of
//! human-readable violations. Touches neither the store nor persistence.
//! Date rule uses the local wall-clock calendar day, consistent with the
//! overdue policy in [`store::stats`](crate::store).

use chrono::{Local, NaiveDate};

use crate::domain::{CreateRequest, UpdateRequest};

const EMPTY_TITLE: &str = "Title must not be empty";
const PAST_DUE_DATE: &str = "Due date must not be in the past";

/// Validate a creation request
pub fn validate_create(request: &CreateRequest) -> Result<(), Vec<String>> {
    validate(Some(&request.title), request.due_date, Local::now().date_naive())
}

/// Validate an update request; absent fields are not checked
pub fn validate_update(request: &UpdateRequest) -> Result<(), Vec<String>> {
    validate(request.title.as_deref(), request.due_date, Local::now().date_naive())
}

fn validate(title: Option<&str>, due_date: Option<NaiveDate>, today: NaiveDate) -> Result<(), Vec<String>> {
    let mut violations = Vec::new();
    if let Some(title) = title
        && title.trim().is_empty()
    {
        violations.push(EMPTY_TITLE.to_string());
    }
    if let Some(due) = due_date
        && due < today
    {
        violations.push(PAST_DUE_DATE.to_string());
    }
    if violations.is_empty() { Ok(()) } else { Err(violations) }
}
