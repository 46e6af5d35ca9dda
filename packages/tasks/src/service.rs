// ABOUTME: Task service orchestrating validation and persistence
// ABOUTME: Create, list, update, delete and mark-done operations with domain error mapping

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::storage::{StoreError, TaskStore};
use crate::types::{ListStatus, NewTask, Task};
use crate::validation::{self, ValidationError};

/// Prepended to every listed title on Saturdays and Sundays
pub const WEEKEND_PREFIX: &str = "ВЫХОДНОЙ - ";

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("{0}")]
    BadRequest(#[from] ValidationError),
    #[error("task not found")]
    NotFound,
    /// Uniqueness conflict on (title, activeAt)
    #[error("{0}")]
    Conflict(&'static str),
    #[error("internal error")]
    Internal(#[source] StoreError),
}

pub type TaskResult<T> = Result<T, TaskError>;

pub struct TaskService {
    store: Arc<dyn TaskStore>,
    clock: Arc<dyn Clock>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn TaskStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Create a task and return its generated id
    pub async fn create(&self, title: &str, active_at: &str) -> TaskResult<String> {
        validation::validate_title(title)?;
        let active_at = validation::parse_date(active_at)?;

        let task = NewTask {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            active_at,
            created_at: self.clock.now(),
        };

        self.store
            .insert(&task)
            .await
            .map_err(|err| conflict_or_internal(err, "task already exists"))?;

        info!("Created task {}", task.id);
        Ok(task.id)
    }

    pub async fn update(&self, id: &str, title: &str, active_at: &str) -> TaskResult<()> {
        validation::validate_id(id)?;
        validation::validate_title(title)?;
        let active_at = validation::parse_date(active_at)?;

        let rows = self
            .store
            .update(id, title, active_at)
            .await
            .map_err(|err| {
                conflict_or_internal(err, "task already exists with same title and date")
            })?;

        ensure_found(rows)?;
        info!("Updated task {}", id);
        Ok(())
    }

    /// Setting done on an already-done task still succeeds
    pub async fn mark_done(&self, id: &str) -> TaskResult<()> {
        validation::validate_id(id)?;

        let rows = self.store.mark_done(id).await.map_err(TaskError::Internal)?;

        ensure_found(rows)?;
        info!("Marked task {} done", id);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> TaskResult<()> {
        validation::validate_id(id)?;

        let rows = self.store.delete(id).await.map_err(TaskError::Internal)?;

        ensure_found(rows)?;
        info!("Deleted task {}", id);
        Ok(())
    }

    pub async fn list(&self, status: ListStatus) -> TaskResult<Vec<Task>> {
        let now = self.clock.now();

        let mut tasks = match status {
            ListStatus::Done => self.store.list_done().await,
            ListStatus::Active => self.store.list_active(now.date_naive()).await,
        }
        .map_err(TaskError::Internal)?;

        if validation::is_weekend(now) {
            for task in &mut tasks {
                task.title = format!("{}{}", WEEKEND_PREFIX, task.title);
            }
        }

        debug!("Listed {} {:?} tasks", tasks.len(), status);
        Ok(tasks)
    }

    pub async fn health(&self) -> TaskResult<()> {
        self.store.ping().await.map_err(TaskError::Internal)
    }
}

fn conflict_or_internal(err: StoreError, message: &'static str) -> TaskError {
    match err {
        StoreError::ConstraintViolation => TaskError::Conflict(message),
        other => TaskError::Internal(other),
    }
}

fn ensure_found(rows: u64) -> TaskResult<()> {
    if rows == 0 {
        return Err(TaskError::NotFound);
    }
    Ok(())
}
