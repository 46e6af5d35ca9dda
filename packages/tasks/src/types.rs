// ABOUTME: Task type definitions
// ABOUTME: Stored task rows, insert input and the list status filter

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};

use crate::validation::format_date;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(serialize_with = "serialize_date")]
    pub active_at: NaiveDate,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub done: bool,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

/// A fully validated task ready to be inserted
#[derive(Debug, Clone)]
pub struct NewTask {
    pub id: String,
    pub title: String,
    pub active_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Active,
    Done,
}

impl ListStatus {
    /// Anything other than `done`, including a missing value, selects active tasks.
    pub fn from_query(status: Option<&str>) -> Self {
        match status {
            Some("done") => ListStatus::Done,
            _ => ListStatus::Active,
        }
    }
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date(*date))
}
