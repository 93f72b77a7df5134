//! Banner management outside the detail screen.

use crate::{
    libs::{
        banner::BannerStore,
        messages::Message,
        task::{ImageUpdate, TaskUpdate},
    },
    msg_error, msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct BannerArgs {
    /// Task ID
    id: i64,
    /// Image to use as banner (png, jpg, jpeg, bmp)
    #[arg(required_unless_present = "clear", conflicts_with = "clear")]
    path: Option<PathBuf>,
    /// Remove the current banner
    #[arg(long)]
    clear: bool,
}

pub fn cmd(args: BannerArgs) -> Result<()> {
    let mut coordinator = super::coordinator()?;
    let task = match coordinator.tasks_mut().get_by_id(args.id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
    };
    let banners = BannerStore::new()?;

    let image = if args.clear {
        let Some(current) = task.image_path.as_deref() else {
            msg_info!(Message::NoBanner);
            return Ok(());
        };
        if let Err(err) = banners.remove(Path::new(current)) {
            msg_error!(Message::BannerRemoveFailed(err.to_string()));
            return Ok(());
        }
        ImageUpdate::Clear
    } else {
        let Some(source) = args.path else {
            return Ok(());
        };
        match banners.import(task.id, &source) {
            Ok(stored) => ImageUpdate::Set(stored.to_string_lossy().into_owned()),
            Err(err) => {
                msg_error!(Message::BannerImportFailed(err.to_string()));
                return Ok(());
            }
        }
    };

    coordinator.handle_image_update(TaskUpdate::from_task(&task).with_image(image));
    Ok(())
}
