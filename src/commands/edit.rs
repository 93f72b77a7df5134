//! Non-interactive detail edit: same save path as the detail screen.

use crate::{
    libs::{
        messages::Message,
        task::{Status, TaskUpdate},
    },
    msg_error, msg_info,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: i64,
    /// New description
    #[arg(short, long)]
    description: Option<String>,
    /// New status: Todo, InProgress or Done
    #[arg(short, long)]
    status: Option<Status>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    if args.description.is_none() && args.status.is_none() {
        msg_info!(Message::NoChangesGiven);
        return Ok(());
    }

    let mut coordinator = super::coordinator()?;
    let task = match coordinator.tasks_mut().get_by_id(args.id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
    };

    let mut update = TaskUpdate::from_task(&task);
    if let Some(description) = args.description {
        update = update.with_description(description.trim());
    }
    if let Some(status) = args.status {
        update = update.with_status(status);
    }
    coordinator.save_edit(update);
    Ok(())
}
