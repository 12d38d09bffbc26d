//! Field validation shared by the query and body paths.
//!
//! # Design
//! Each enum field is checked against its fixed value set; absent fields
//! pass. Validation short-circuits on the first failing field, in a fixed
//! order: status, priority, category, then the date. A request with several
//! bad fields reports only the first. This ordering is part of the API
//! contract, not an accident.
//!
//! Due dates are parsed as calendar dates and re-formatted to zero-padded
//! `yyyy-MM-dd`, so `2021-1-2` normalizes to `2021-01-02` and impossible
//! dates (month 13, day 40) are rejected.

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::types::{CreateTodo, TodoQuery, UpdateTodo};

const STATUS_VALUES: [&str; 3] = ["TO DO", "IN PROGRESS", "DONE"];
const PRIORITY_VALUES: [&str; 3] = ["HIGH", "MEDIUM", "LOW"];
const CATEGORY_VALUES: [&str; 3] = ["WORK", "HOME", "LEARNING"];

fn check_status(value: &str) -> Result<(), ApiError> {
    if STATUS_VALUES.contains(&value) {
        Ok(())
    } else {
        Err(ApiError::InvalidStatus)
    }
}

fn check_priority(value: &str) -> Result<(), ApiError> {
    if PRIORITY_VALUES.contains(&value) {
        Ok(())
    } else {
        Err(ApiError::InvalidPriority)
    }
}

fn check_category(value: &str) -> Result<(), ApiError> {
    if CATEGORY_VALUES.contains(&value) {
        Ok(())
    } else {
        Err(ApiError::InvalidCategory)
    }
}

/// Parse a due date and normalize it to zero-padded `yyyy-MM-dd`.
pub fn normalize_due_date(value: &str) -> Result<String, ApiError> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::InvalidDueDate)?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Validate list/agenda query parameters in place, normalizing `date`.
/// `search_q` passes through untouched.
pub fn validate_query(query: &mut TodoQuery) -> Result<(), ApiError> {
    if let Some(status) = &query.status {
        check_status(status)?;
    }
    if let Some(priority) = &query.priority {
        check_priority(priority)?;
    }
    if let Some(category) = &query.category {
        check_category(category)?;
    }
    if let Some(date) = query.date.take() {
        query.date = Some(normalize_due_date(&date)?);
    }
    Ok(())
}

/// Validate a create payload in place, normalizing `due_date`.
/// `id` and `todo` pass through untouched.
pub fn validate_create(body: &mut CreateTodo) -> Result<(), ApiError> {
    check_status(&body.status)?;
    check_priority(&body.priority)?;
    check_category(&body.category)?;
    body.due_date = normalize_due_date(&body.due_date)?;
    Ok(())
}

/// Validate an update payload in place. Only supplied fields are checked.
pub fn validate_update(body: &mut UpdateTodo) -> Result<(), ApiError> {
    if let Some(status) = &body.status {
        check_status(status)?;
    }
    if let Some(priority) = &body.priority {
        check_priority(priority)?;
    }
    if let Some(category) = &body.category {
        check_category(category)?;
    }
    if let Some(due_date) = body.due_date.take() {
        body.due_date = Some(normalize_due_date(&due_date)?);
    }
    Ok(())
}
