//! Command-line surface of taskdesk.
//!
//! Every subcommand is a thin wrapper that builds a [`Coordinator`] over the
//! terminal presentation and calls the one operation it needs. Running
//! `taskdesk` without a subcommand starts the interactive screens.

pub mod add;
pub mod banner;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;
pub mod status;
pub mod ui;

use crate::{
    db::tasks::Tasks,
    libs::{banner::BannerStore, config::Config, coordinator::Coordinator, task::TaskEvent, terminal::TerminalPresentation},
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "List all tasks, newest first")]
    List,
    #[command(about = "Show a single task")]
    Show(show::ShowArgs),
    #[command(about = "Change the status of a task")]
    Status(status::StatusArgs),
    #[command(about = "Edit the description and/or status of a task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Set or remove the banner image of a task")]
    Banner(banner::BannerArgs),
    #[command(about = "Open the interactive task board")]
    Ui,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init) => init::cmd(),
            Some(Commands::Add(args)) => add::cmd(args),
            Some(Commands::List) => list::cmd(),
            Some(Commands::Show(args)) => show::cmd(args),
            Some(Commands::Status(args)) => status::cmd(args),
            Some(Commands::Edit(args)) => edit::cmd(args),
            Some(Commands::Delete(args)) => delete::cmd(args),
            Some(Commands::Banner(args)) => banner::cmd(args),
            Some(Commands::Ui) | None => ui::cmd(),
        }
    }
}

/// Wires the default store, banner directory and saved theme together.
pub(crate) fn coordinator() -> Result<Coordinator<TerminalPresentation>> {
    let config = Config::read().unwrap_or_default();
    let mut tasks = Tasks::new()?;
    tasks.subscribe(log_event);
    let presentation = TerminalPresentation::new(config.theme, BannerStore::new()?);
    Ok(Coordinator::new(tasks, presentation))
}

fn log_event(event: &TaskEvent) {
    match event {
        TaskEvent::Created(task) => tracing::info!(id = task.id, title = %task.title, "task created"),
        TaskEvent::Updated(task) => tracing::info!(id = task.id, status = task.status.as_str(), "task updated"),
        TaskEvent::Deleted(id) => tracing::info!(id, "task deleted"),
        TaskEvent::UpdateFailed { id, message } => tracing::warn!(id, %message, "task update failed"),
    }
}
