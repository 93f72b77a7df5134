use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: i64,
}

/// Asks for confirmation before anything is removed.
pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut coordinator = super::coordinator()?;
    coordinator.delete(args.id);
    Ok(())
}
