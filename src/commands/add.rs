use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: String,
    /// Optional description
    #[arg(short, long, default_value = "")]
    description: String,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut coordinator = super::coordinator()?;
    coordinator.create(&args.title, &args.description);
    Ok(())
}
