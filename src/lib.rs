//! HTTP CRUD service over a single SQLite table of todos.
//!
//! # Overview
//! Six endpoints: filtered listing, lookup by id, a date-based agenda view,
//! create, partial update, and delete. Each handler validates its inputs,
//! issues one statement through [`TodoStore`], and serializes the result.
//!
//! # Design
//! - Validation runs before any storage call and short-circuits on the
//!   first failing field; the exact 400 messages live on [`ApiError`].
//! - The store is constructed by the caller and injected into the router,
//!   so tests run the full HTTP surface against an in-memory database.
//! - Mutating endpoints answer with short plain-text confirmations rather
//!   than echoing the entity.

pub mod error;
pub mod store;
pub mod types;
pub mod validate;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

pub use error::ApiError;
pub use store::{TodoFilter, TodoStore};
pub use types::{CreateTodo, Todo, TodoQuery, UpdateTodo};

/// Build the router around an already-opened store.
pub fn app(store: TodoStore) -> Router {
    Router::new()
        .route("/todos/", get(list_todos).post(create_todo))
        .route(
            "/todos/{todoId}/",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/agenda/", get(agenda))
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_todos(
    State(store): State<TodoStore>,
    Query(mut query): Query<TodoQuery>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    validate::validate_query(&mut query)?;
    let filter = TodoFilter {
        search_q: query.search_q.unwrap_or_default(),
        status: query.status.unwrap_or_default(),
        priority: query.priority.unwrap_or_default(),
        category: query.category.unwrap_or_default(),
    };
    Ok(Json(store.search(&filter).await?))
}

async fn get_todo(
    State(store): State<TodoStore>,
    Path(todo_id): Path<i64>,
    Query(mut query): Query<TodoQuery>,
) -> Result<Json<Todo>, ApiError> {
    // Query parameters are unused here but still validated, so a bad
    // status or date on a lookup is a 400 like everywhere else.
    validate::validate_query(&mut query)?;
    let todo = store.get(todo_id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(todo))
}

async fn agenda(
    State(store): State<TodoStore>,
    Query(mut query): Query<TodoQuery>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    validate::validate_query(&mut query)?;
    let date = query.date.ok_or(ApiError::InvalidDueDate)?;
    Ok(Json(store.due_on(&date).await?))
}

async fn create_todo(
    State(store): State<TodoStore>,
    Json(mut body): Json<CreateTodo>,
) -> Result<&'static str, ApiError> {
    validate::validate_create(&mut body)?;
    store.insert(&body).await?;
    Ok("Todo Successfully Added")
}

async fn update_todo(
    State(store): State<TodoStore>,
    Path(todo_id): Path<i64>,
    Json(mut body): Json<UpdateTodo>,
) -> Result<String, ApiError> {
    validate::validate_update(&mut body)?;
    let updated_column = body.updated_column();
    store.update(todo_id, &body).await?;
    // Confirmation is unconditional: a missing id still names the field
    // that would have changed.
    Ok(format!("{updated_column} Updated"))
}

async fn delete_todo(
    State(store): State<TodoStore>,
    Path(todo_id): Path<i64>,
) -> Result<&'static str, ApiError> {
    store.delete(todo_id).await?;
    Ok("Todo Deleted")
}
