//! # taskdesk
//!
//! A small personal task board backed by SQLite.
//!
//! ## Features
//!
//! - **Tasks**: title, description, status (To do, In progress, Done)
//! - **Banners**: an optional image per task, shrunk to fit 800x300
//! - **Two screens**: a newest-first list and a per-task detail card
//! - **One-shot commands**: add, list, show, status, edit, delete, banner
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::task::Status;
//!
//! let mut tasks = Tasks::open("/tmp/taskdesk.db")?;
//! let task = tasks.create("Write report", "", Status::Todo)?;
//! tasks.update_status_only(task.id, "Done")?;
//! # Ok::<(), taskdesk::libs::error::TaskError>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
