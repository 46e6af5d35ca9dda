// ABOUTME: Task storage layer using PostgreSQL
// ABOUTME: Server-backed store used by default deployments

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

use super::queries::{Dialect, Statements};
use super::{StoreResult, TaskStore};
use crate::types::{NewTask, Task};

pub struct PostgresTaskStore {
    pool: PgPool,
    statements: Statements,
}

impl PostgresTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            statements: Statements::new(Dialect::Postgres),
        }
    }

    /// Connect to `url` and run migrations
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        debug!("Connecting to PostgreSQL database");

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect(url)
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations/postgres").run(&self.pool).await?;
        debug!("PostgreSQL migrations completed");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
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
