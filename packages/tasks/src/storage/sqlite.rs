// ABOUTME: Task storage layer using SQLite
// ABOUTME: Embedded file-based store for local development and tests

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::debug;

use super::queries::{Dialect, Statements};
use super::{StoreResult, TaskStore};
use crate::types::{NewTask, Task};

pub struct SqliteTaskStore {
    pool: SqlitePool,
    statements: Statements,
}

impl SqliteTaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            statements: Statements::new(Dialect::Sqlite),
        }
    }

    /// Connect to `url`, creating the database file if needed, and run migrations
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        debug!("Connecting to SQLite database: {}", url);

        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Private in-memory database on a single long-lived connection
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations/sqlite").run(&self.pool).await?;
        debug!("SQLite migrations completed");
        Ok(())
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn insert(&self, task: &NewTask) -> StoreResult<()> {
        debug!("Inserting task: {}", task.id);

        sqlx::query(&self.statements.insert)
            .bind(&task.id)
            .bind(&task.title)
            .bind(task.active_at)
            .bind(task.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update(&self, id: &str, title: &str, active_at: NaiveDate) -> StoreResult<u64> {
        debug!("Updating task: {}", id);

        let result = sqlx::query(&self.statements.update)
            .bind(title)
            .bind(active_at)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn mark_done(&self, id: &str) -> StoreResult<u64> {
        debug!("Marking task done: {}", id);

        let result = sqlx::query(&self.statements.mark_done)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> StoreResult<u64> {
        debug!("Deleting task: {}", id);

        let result = sqlx::query(&self.statements.delete)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list_done(&self) -> StoreResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(&self.statements.list_done)
            .fetch_all(&self.pool)
            .await?;

        Ok(tasks)
    }

    async fn list_active(&self, today: NaiveDate) -> StoreResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(&self.statements.list_active)
            .bind(today)
            .fetch_all(&self.pool)
            .await?;

        Ok(tasks)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
