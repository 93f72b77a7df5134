//! Error types for the store, the task repository and banner handling

use rusqlite::types::FromSqlError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the SQLite store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Statement failed to prepare or execute, including constraint violations
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A record was asked for a column the statement did not return
    #[error("Column '{column}' not present in result")]
    MissingColumn { column: String },

    /// A column value could not be converted to the requested type
    #[error("Column '{column}' has an unexpected value: {source}")]
    Column {
        column: String,
        #[source]
        source: FromSqlError,
    },
}

/// Result type alias for task repository operations
pub type TaskResult<T> = std::result::Result<T, TaskError>;

/// Errors surfaced by the task repository
#[derive(Debug, Error)]
pub enum TaskError {
    /// Input rejected before reaching the store
    #[error("Invalid task: {message}")]
    Validation { message: String },

    /// No task with this id
    #[error("Task {id} not found")]
    NotFound { id: i64 },

    /// Full update rejected by the store
    #[error("Failed to update task {id}: {message}")]
    UpdateFailed { id: i64, message: String },

    /// The store accepted an insert but the new row cannot be read back
    #[error("Task was inserted but could not be read back")]
    Inconsistent,

    /// Any other store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<rusqlite::Error> for TaskError {
    fn from(err: rusqlite::Error) -> Self {
        TaskError::Store(StoreError::Sqlite(err))
    }
}

/// Errors raised while importing or removing banner images
#[derive(Debug, Error)]
pub enum BannerError {
    /// Source file does not exist
    #[error("Image file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Decoding, resizing or encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
