//! Task repository: the domain CRUD contract over the [`Store`].
//!
//! `Tasks` is the only writer of task rows. Every operation returns its
//! outcome directly; observers registered with [`Tasks::subscribe`] are
//! additionally told about creations, full updates (successful or not) and
//! deletions.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::task::Status;
//!
//! let mut tasks = Tasks::new()?;
//! let task = tasks.create("Buy milk", "", Status::Todo)?;
//! tasks.update_status_only(task.id, Status::Done.as_str())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::store::{Fetch, Record, Store};
use crate::libs::error::{StoreError, TaskError, TaskResult};
use crate::libs::task::{ImageUpdate, Status, Task, TaskEvent, TaskUpdate};
use anyhow::Result;
use rusqlite::params;
use rusqlite::types::Value;
use std::path::Path;

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, status) VALUES (?1, ?2, ?3) RETURNING *";
const SELECT_LATEST: &str = "SELECT * FROM tasks ORDER BY id DESC LIMIT 1";
const SELECT_ALL: &str = "SELECT * FROM tasks ORDER BY created_at DESC, id DESC";
const SELECT_BY_ID: &str = "SELECT * FROM tasks WHERE id = ?1";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?2, updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now') WHERE id = ?1 RETURNING id";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

type Observer = Box<dyn FnMut(&TaskEvent)>;

pub struct Tasks {
    store: Store,
    observers: Vec<Observer>,
}

impl Tasks {
    /// Opens the repository on the store in the default data directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_store(Store::new()?))
    }

    pub fn open(path: impl AsRef<Path>) -> TaskResult<Self> {
        Ok(Self::with_store(Store::open(path)?))
    }

    pub fn with_store(store: Store) -> Self {
        Self { store, observers: Vec::new() }
    }

    /// Registers an observer; observers run synchronously, in registration
    /// order, after the store call has finished.
    pub fn subscribe(&mut self, observer: impl FnMut(&TaskEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: TaskEvent) {
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }

    /// Inserts a task and returns the row as stored, with the id, default
    /// status and timestamps assigned by the store.
    pub fn create(&mut self, title: &str, description: &str, status: Status) -> TaskResult<Task> {
        if title.trim().is_empty() {
            return Err(TaskError::Validation {
                message: "title must not be empty".to_string(),
            });
        }

        let returned = self.store.execute(INSERT_TASK, params![title, description, status], Fetch::One)?.into_one();

        let record = match returned {
            Some(record) => record,
            None => {
                // Drivers without RETURNING support: read the newest row back.
                tracing::warn!(rowid = self.store.last_insert_id(), "insert returned no row, re-reading latest task");
                self.store.execute(SELECT_LATEST, [], Fetch::One)?.into_one().ok_or(TaskError::Inconsistent)?
            }
        };

        let task = to_task(&record)?;
        tracing::debug!(id = task.id, title = %task.title, "task created");
        self.emit(TaskEvent::Created(task.clone()));
        Ok(task)
    }

    /// All tasks, newest first.
    pub fn get_all(&mut self) -> TaskResult<Vec<Task>> {
        let records = self.store.execute(SELECT_ALL, [], Fetch::All)?.into_all();
        let tasks = records.iter().map(to_task).collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> TaskResult<Option<Task>> {
        let record = self.store.execute(SELECT_BY_ID, params![id], Fetch::One)?.into_one();
        Ok(record.as_ref().map(to_task).transpose()?)
    }

    /// Rewrites title, description and status, plus the banner column when
    /// `update.image` asks for it, and bumps `updated_at`.
    ///
    /// Failures are reported both as the returned
    /// [`TaskError::UpdateFailed`] and as a [`TaskEvent::UpdateFailed`]
    /// notification carrying the task id.
    pub fn update_full(&mut self, update: &TaskUpdate) -> TaskResult<Task> {
        match self.try_update_full(update) {
            Ok(task) => {
                tracing::debug!(id = task.id, status = task.status.as_str(), "task updated");
                self.emit(TaskEvent::Updated(task.clone()));
                Ok(task)
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(id = update.id, error = %message, "task update failed");
                self.emit(TaskEvent::UpdateFailed {
                    id: update.id,
                    message: message.clone(),
                });
                Err(TaskError::UpdateFailed { id: update.id, message })
            }
        }
    }

    fn try_update_full(&mut self, update: &TaskUpdate) -> TaskResult<Task> {
        let (sql, values) = build_full_update(update);
        let record = self
            .store
            .execute(&sql, rusqlite::params_from_iter(values.iter()), Fetch::One)?
            .into_one()
            .ok_or(TaskError::NotFound { id: update.id })?;
        Ok(to_task(&record)?)
    }

    /// Single-column status change used by inline status controls. Emits no
    /// notification; callers refresh their own view if they need to.
    pub fn update_status_only(&mut self, id: i64, status: &str) -> TaskResult<()> {
        let updated = self.store.execute(UPDATE_STATUS, params![id, status], Fetch::One)?.into_one();
        if updated.is_none() {
            return Err(TaskError::NotFound { id });
        }
        tracing::debug!(id, status, "task status changed");
        Ok(())
    }

    /// Deletes the row if it exists; deleting an unknown id is not an error.
    pub fn delete(&mut self, id: i64) -> TaskResult<()> {
        self.store.execute(DELETE_TASK, params![id], Fetch::None)?;
        tracing::debug!(id, "task deleted");
        self.emit(TaskEvent::Deleted(id));
        Ok(())
    }
}

fn to_task(record: &Record) -> Result<Task, StoreError> {
    Task::try_from(record)
}

/// Builds the UPDATE statement covering exactly the columns present in
/// `update`, returning the SQL and its positional values.
fn build_full_update(update: &TaskUpdate) -> (String, Vec<Value>) {
    let mut columns = vec!["title", "description", "status"];
    let mut values = vec![
        Value::Text(update.title.clone()),
        Value::Text(update.description.clone()),
        Value::Text(update.status.clone()),
    ];

    match &update.image {
        ImageUpdate::Keep => {}
        ImageUpdate::Set(path) => {
            columns.push("image_path");
            values.push(Value::Text(path.clone()));
        }
        ImageUpdate::Clear => {
            columns.push("image_path");
            values.push(Value::Null);
        }
    }

    let assignments: Vec<String> = columns.iter().enumerate().map(|(i, column)| format!("{} = ?{}", column, i + 1)).collect();
    values.push(Value::Integer(update.id));

    let sql = format!(
        "UPDATE tasks SET {}, updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now') WHERE id = ?{} RETURNING *",
        assignments.join(", "),
        values.len()
    );
    (sql, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(image: ImageUpdate) -> TaskUpdate {
        TaskUpdate {
            id: 7,
            title: "Title".to_string(),
            description: "Body".to_string(),
            status: "Done".to_string(),
            image,
        }
    }

    #[test]
    fn full_update_leaves_image_out_when_kept() {
        let (sql, values) = build_full_update(&update(ImageUpdate::Keep));

        assert_eq!(
            sql,
            "UPDATE tasks SET title = ?1, description = ?2, status = ?3, updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now') WHERE id = ?4 RETURNING *"
        );
        assert_eq!(values.len(), 4);
        assert_eq!(values[3], Value::Integer(7));
    }

    #[test]
    fn full_update_clears_image_with_null() {
        let (sql, values) = build_full_update(&update(ImageUpdate::Clear));

        assert!(sql.contains("image_path = ?4"));
        assert!(sql.contains("WHERE id = ?5"));
        assert_eq!(values[3], Value::Null);
    }

    #[test]
    fn full_update_sets_image_path() {
        let (_, values) = build_full_update(&update(ImageUpdate::Set("images/task_7_banner.png".to_string())));

        assert_eq!(values[3], Value::Text("images/task_7_banner.png".to_string()));
    }
}
