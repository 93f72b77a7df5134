//! Contract between the coordinator and whatever renders tasks.
//!
//! A presentation renders the list and detail screens, asks the user for
//! confirmation, and reports what the user wants as [`Intent`] values. It
//! never touches the repository: every change goes through the
//! [`Coordinator`](crate::libs::coordinator::Coordinator), which owns the
//! presentation from construction onwards.

use super::messages::Message;
use super::task::{Status, Task, TaskUpdate};
use anyhow::Result;

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Create { title: String, description: String },
    OpenDetail(i64),
    Delete(i64),
    ChangeStatus(i64, Status),
    Save(TaskUpdate),
    /// The presentation stored or removed a banner file; the update carries
    /// the new image path.
    ImageChanged(TaskUpdate),
    Back,
}

/// Which screen the coordinator has put the presentation on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    List,
    Detail(i64),
}

pub trait Presentation {
    /// Empties the displayed task list.
    fn clear_tasks(&mut self);

    /// Appends one task to the displayed list.
    fn add_task(&mut self, task: &Task);

    /// Resets the title/description inputs after a successful create.
    fn clear_inputs(&mut self);

    fn show_list(&mut self) -> Result<()>;

    fn show_detail(&mut self, task: &Task) -> Result<()>;

    fn show_error(&mut self, message: &Message);

    fn show_success(&mut self, message: &Message);

    /// Yes/no question; `Ok(false)` when the user declines.
    fn confirm(&mut self, message: &Message) -> Result<bool>;

    /// Blocks until the user does something. `Ok(None)` means quit.
    fn next_intent(&mut self) -> Result<Option<Intent>>;
}
