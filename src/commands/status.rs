use crate::libs::task::Status;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Task ID
    id: i64,
    /// New status: Todo, InProgress or Done
    status: Status,
}

pub fn cmd(args: StatusArgs) -> Result<()> {
    let mut coordinator = super::coordinator()?;
    coordinator.change_status(args.id, args.status);
    Ok(())
}
