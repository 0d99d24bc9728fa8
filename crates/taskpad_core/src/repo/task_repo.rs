//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `tasks` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `add_task` never accepts a caller-chosen id; the engine assigns it.
//! - `update_task` on a missing id fails with `NotFound`; it never
//!   creates a record.
//! - `delete_task` on a missing id is a no-op.
//! - Each operation is a single statement; there is no multi-operation
//!   transactional grouping.

use crate::db::DbError;
use crate::model::task::{Task, TaskId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    /// Returns every stored task. Row order is whatever the engine
    /// yields; callers must not rely on it.
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
    /// Inserts a new record with the given title and returns the
    /// engine-assigned id.
    fn add_task(&self, title: &str) -> RepoResult<TaskId>;
    /// Replaces the full record at `id` with the given title.
    fn update_task(&self, id: TaskId, title: &str) -> RepoResult<()>;
    /// Removes the record at `id` if present.
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
}

/// SQLite-backed task repository over a bootstrapped connection.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare("SELECT id, title FROM tasks;")?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn add_task(&self, title: &str) -> RepoResult<TaskId> {
        self.conn
            .execute("INSERT INTO tasks (title) VALUES (?1);", [title])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_task(&self, id: TaskId, title: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks SET title = ?1 WHERE id = ?2;",
            params![title, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        // Idempotent by contract: zero affected rows is still success.
        self.conn
            .execute("DELETE FROM tasks WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
    })
}
