//! Task model: the persisted record, its status and the update records
//! the presentation hands to the coordinator.

use crate::db::store::Record;
use crate::libs::error::StoreError;
use chrono::NaiveDateTime;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    /// Text stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "Todo",
            Status::InProgress => "InProgress",
            Status::Done => "Done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "To do",
            Status::InProgress => "In progress",
            Status::Done => "Done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status '{}', expected one of: Todo, InProgress, Done", self.0)
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for Status {
    type Err = ParseStatusError;

    /// Accepts the stored spelling, case-insensitively, plus the
    /// spaced/hyphenated forms people type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| !matches!(c, ' ' | '-' | '_')).collect::<String>().to_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Status::Todo),
            "inprogress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        // Stored text must match exactly; the lenient parser is for user input.
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == text)
            .ok_or_else(|| FromSqlError::Other(Box::new(ParseStatusError(text.to_string()))))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub image_path: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<&Record> for Task {
    type Error = StoreError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        Ok(Task {
            id: record.get("id")?,
            title: record.get("title")?,
            description: record.get::<Option<String>>("description")?.unwrap_or_default(),
            status: record.get("status")?,
            image_path: record.get("image_path")?,
            created_at: record.get("created_at")?,
            updated_at: record.get("updated_at")?,
        })
    }
}

/// What a full update does with the banner column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageUpdate {
    /// Column is left out of the statement.
    #[default]
    Keep,
    Set(String),
    /// Column is set to NULL.
    Clear,
}

/// Record handed to the full-update path.
///
/// `status` is carried as text: the store's CHECK constraint is what decides
/// whether it is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub image: ImageUpdate,
}

impl TaskUpdate {
    /// Update that rewrites `task` with its current values and leaves the
    /// banner untouched.
    pub fn from_task(task: &Task) -> Self {
        TaskUpdate {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.as_str().to_string(),
            image: ImageUpdate::Keep,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status.as_str().to_string();
        self
    }

    pub fn with_image(mut self, image: ImageUpdate) -> Self {
        self.image = image;
        self
    }
}

/// Notifications emitted by the repository to its observers.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskEvent {
    Created(Task),
    Updated(Task),
    Deleted(i64),
    UpdateFailed { id: i64, message: String },
}
