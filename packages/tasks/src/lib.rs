// ABOUTME: Task model, validation, persistence and service layer for the todo list
// ABOUTME: Provides the TaskService used by the HTTP layer and its SQLite/PostgreSQL stores

pub mod clock;
pub mod service;
pub mod storage;
pub mod types;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use service::{TaskError, TaskService};
pub use storage::{Backend, StoreError, TaskStore};
pub use types::{ListStatus, NewTask, Task};
pub use validation::ValidationError;
