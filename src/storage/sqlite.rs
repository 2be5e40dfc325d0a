//! `SQLite` storage backend.
//!
//! Tasks are rows of a single `tasks` table whose column names match the JSON
//! field names. Every write runs in one transaction, so other connections see
//! either the old collection or the new one, never a mix.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Executor, Statement};
use tracing::info;

use crate::config::SqliteStorageConfig;
use crate::domain::{Task, TaskId, default_tasks};
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::TaskStore;

const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    "id" INTEGER PRIMARY KEY,
    "name" TEXT,
    "start" TEXT,
    "durationDays" INTEGER,
    "color" TEXT,
    "priority" INTEGER
)
"#;

const SELECT_TASKS_SQL: &str =
    "SELECT id, name, start, durationDays, color, priority FROM tasks ORDER BY priority";

const INSERT_TASK_SQL: &str =
    "INSERT INTO tasks (id, name, start, durationDays, color, priority) VALUES (?, ?, ?, ?, ?, ?)";

/// `SQLite`-backed task store.
pub struct SqliteTaskStore {
    pool: SqlitePool,
}

impl SqliteTaskStore {
    /// Open (or create) the database file and prepare it for use.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened, the schema cannot be
    /// created, or the initial seed fails.
    pub async fn open(config: &SqliteStorageConfig) -> StorageResult<Self> {
        if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Connection(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        info!(path = %config.path.display(), "Opened SQLite database");
        Self::with_pool(pool).await
    }

    /// Open a database from a connection URL such as `sqlite::memory:`.
    ///
    /// In-memory databases are private to one connection, so the pool is
    /// capped at a single connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or initialization fails.
    pub async fn connect(url: &str) -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| StorageError::Connection(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        Self::with_pool(pool).await
    }

    /// Wrap an existing pool, creating the table and seeding it when empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created or the seed fails.
    pub async fn with_pool(pool: SqlitePool) -> StorageResult<Self> {
        let store = Self { pool };
        store.run_migrations().await?;
        store.seed_if_empty().await?;
        Ok(store)
    }

    /// Returns a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn run_migrations(&self) -> StorageResult<()> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Migration(format!("Failed to create tasks table: {e}")))?;
        Ok(())
    }

    async fn seed_if_empty(&self) -> StorageResult<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StorageError::Migration(format!("Failed to count tasks: {e}")))?;

        if count == 0 {
            info!("Database is empty, inserting default tasks");
            self.replace_all(&default_tasks()).await?;
        }

        Ok(())
    }
}

/// Decode failures mean the row did not fit `Task`; anything else is the query.
fn load_error(err: sqlx::Error) -> StorageError {
    match &err {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::TypeNotFound { .. } => StorageError::Scan(err.to_string()),
        _ => StorageError::Query(err.to_string()),
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn load(&self) -> StorageResult<Vec<Task>> {
        sqlx::query_as::<_, Task>(SELECT_TASKS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(load_error)
    }

    async fn replace_all(&self, tasks: &[Task]) -> StorageResult<()> {
        // Dropping `tx` on any early return rolls the transaction back
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Transaction(format!("Failed to begin: {e}")))?;

        sqlx::query("DELETE FROM tasks")
            .execute(&mut *tx)
            .await
            .map_err(|e| StorageError::Exec(format!("Failed to delete existing tasks: {e}")))?;

        let insert = (&mut *tx)
            .prepare(INSERT_TASK_SQL)
            .await
            .map_err(|e| StorageError::Prepare(e.to_string()))?;

        for task in tasks {
            insert
                .query()
                .bind(task.id)
                .bind(&task.name)
                .bind(&task.start)
                .bind(task.duration_days)
                .bind(&task.color)
                .bind(task.priority)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    StorageError::Exec(format!("Failed to insert task {}: {e}", task.id))
                })?;
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Transaction(format!("Failed to commit: {e}")))?;

        info!(count = tasks.len(), "Replaced task collection");
        Ok(())
    }

    async fn delete_by_id(&self, id: TaskId) -> StorageResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Transaction(format!("Failed to begin: {e}")))?;

        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| StorageError::Exec(format!("Failed to delete task {id}: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Transaction(format!("Failed to commit: {e}")))?;

        info!(id, "Deleted task");
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
