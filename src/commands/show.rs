use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    id: i64,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let mut coordinator = super::coordinator()?;
    coordinator.open_detail(args.id);
    Ok(())
}
