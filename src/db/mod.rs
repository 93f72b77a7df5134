//! Persistence layer for taskdesk.
//!
//! A single SQLite file holds the `tasks` table (and a `comments` table kept
//! for forward compatibility, unused by any code path). The layer is split
//! in two:
//!
//! - [`store`]: owns the connection, creates the schema idempotently and runs
//!   parameterized statements, returning rows as name-addressable records.
//! - [`tasks`]: the task repository. Maps records to [`Task`](crate::libs::task::Task)
//!   values and notifies observers about changes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::task::Status;
//!
//! let mut tasks = Tasks::open("taskdesk.db")?;
//! let created = tasks.create("Write release notes", "", Status::Todo)?;
//! assert_eq!(tasks.get_by_id(created.id)?, Some(created));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Every statement commits on its own. There are no multi-statement
//! transactions, no caching and no pagination: reads return full result
//! sets.

/// Connection ownership, schema and statement execution.
pub mod store;

/// Task CRUD operations and change notifications.
pub mod tasks;
