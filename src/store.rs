//! SQLite-backed todo storage.
//!
//! # Design
//! `TodoStore` wraps a `sqlx::SqlitePool` and owns every SQL statement the
//! service issues: one method per statement, all parameterized. Handlers
//! never see SQL. The schema is bootstrapped on open with
//! `CREATE TABLE IF NOT EXISTS`, so a fresh database file works without a
//! separate setup step.
//!
//! List filtering uses `LIKE '%' || ? || '%'` for every filter column:
//! empty filter values degrade to match-everything, which is how the list
//! endpoint treats absent query parameters.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::types::{CreateTodo, Todo, UpdateTodo};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS todo (
    id INTEGER PRIMARY KEY,
    todo TEXT NOT NULL,
    priority TEXT NOT NULL,
    status TEXT NOT NULL,
    category TEXT NOT NULL,
    due_date TEXT NOT NULL
)";

const SELECT_COLUMNS: &str =
    "SELECT id, todo, priority, status, category, due_date FROM todo";

/// Substring filters applied by the list endpoint. Empty strings match
/// every row.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    pub search_q: String,
    pub status: String,
    pub priority: String,
    pub category: String,
}

/// Shared handle to the todo table. Cheap to clone; all clones use the same
/// connection pool.
#[derive(Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    /// Open (creating if missing) the database at `url` and bootstrap the
    /// schema. `url` is a sqlx SQLite URL, e.g. `sqlite:todo.db`.
    pub async fn open(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Open a private in-memory database. The pool is capped at a single
    /// connection: each SQLite in-memory connection is its own database, so
    /// a larger pool would scatter rows across invisible copies. Reaping is
    /// disabled for the same reason; a replacement connection would come up
    /// empty.
    pub async fn open_in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// All todos matching every filter by substring containment.
    pub async fn search(&self, filter: &TodoFilter) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "{SELECT_COLUMNS} WHERE todo LIKE '%' || ?1 || '%' \
             AND priority LIKE '%' || ?2 || '%' \
             AND status LIKE '%' || ?3 || '%' \
             AND category LIKE '%' || ?4 || '%'"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&filter.search_q)
            .bind(&filter.priority)
            .bind(&filter.status)
            .bind(&filter.category)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// All todos due exactly on `date` (`yyyy-MM-dd`).
    pub async fn due_on(&self, date: &str) -> Result<Vec<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>(&format!("{SELECT_COLUMNS} WHERE due_date = ?1"))
            .bind(date)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert one todo with a caller-supplied id. A duplicate id violates
    /// the primary key and surfaces as a storage error.
    pub async fn insert(&self, todo: &CreateTodo) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO todo (id, todo, priority, status, category, due_date) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(todo.id)
        .bind(&todo.todo)
        .bind(&todo.priority)
        .bind(&todo.status)
        .bind(&todo.category)
        .bind(&todo.due_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Partial update: `COALESCE` keeps the stored value for every field
    /// the patch omits. Returns the number of rows touched.
    pub async fn update(&self, id: i64, patch: &UpdateTodo) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE todo SET \
             todo = COALESCE(?1, todo), \
             priority = COALESCE(?2, priority), \
             status = COALESCE(?3, status), \
             category = COALESCE(?4, category), \
             due_date = COALESCE(?5, due_date) \
             WHERE id = ?6",
        )
        .bind(&patch.todo)
        .bind(&patch.priority)
        .bind(&patch.status)
        .bind(&patch.category)
        .bind(&patch.due_date)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete by id. Returns the number of rows removed (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
