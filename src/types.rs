//! Domain DTOs for the todo agenda API.
//!
//! # Design
//! `Todo` doubles as the row type (`sqlx::FromRow`) and the response body;
//! the `due_date` column serializes as `dueDate` on the wire.
//! `CreateTodo` requires every field at the serde
//! layer, so a missing field is rejected before validation runs.
//! `UpdateTodo` is all-optional: omitted fields are left untouched by the
//! store.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single todo item as stored and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub todo: String,
    pub priority: String,
    pub status: String,
    pub category: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

/// Request payload for creating a todo. The caller supplies the id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub id: i64,
    pub todo: String,
    pub priority: String,
    pub status: String,
    pub category: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

/// Request payload for updating a todo. Only the fields present in the JSON
/// are written; omitted fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub todo: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
}

impl UpdateTodo {
    /// Name of the field the confirmation message reports. Precedence is
    /// fixed: status, priority, todo, category, due date. An empty patch
    /// falls back to "Todo".
    pub fn updated_column(&self) -> &'static str {
        if self.status.is_some() {
            "Status"
        } else if self.priority.is_some() {
            "Priority"
        } else if self.todo.is_some() {
            "Todo"
        } else if self.category.is_some() {
            "Category"
        } else if self.due_date.is_some() {
            "Due Date"
        } else {
            "Todo"
        }
    }
}

/// Query parameters accepted by the list and agenda endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoQuery {
    pub search_q: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}
