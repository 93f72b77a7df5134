//! Banner images attached to tasks.
//!
//! Images are copied into a managed directory under a name derived from the
//! task id (`task_<id>_banner.png`), shrunk to fit the banner box and
//! re-encoded as PNG. The store only keeps the resulting path.

use super::data_storage::DataStorage;
use super::error::BannerError;
use anyhow::Result;
use image::{GenericImageView, ImageFormat};
use std::fs;
use std::path::{Path, PathBuf};

pub const BANNER_DIR_NAME: &str = "images";
pub const BANNER_MAX_WIDTH: u32 = 800;
pub const BANNER_MAX_HEIGHT: u32 = 300;

#[derive(Debug, Clone)]
pub struct BannerStore {
    dir: PathBuf,
}

impl BannerStore {
    /// Banner directory inside the default data directory.
    pub fn new() -> Result<Self> {
        Ok(Self::at(DataStorage::new().get_dir(BANNER_DIR_NAME)?))
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, task_id: i64) -> PathBuf {
        self.dir.join(format!("task_{}_banner.png", task_id))
    }

    /// Copies `source` into the banner directory for `task_id`, replacing any
    /// previous banner, and returns the stored path.
    pub fn import(&self, task_id: i64, source: &Path) -> Result<PathBuf, BannerError> {
        if !source.is_file() {
            return Err(BannerError::SourceNotFound { path: source.to_path_buf() });
        }

        let mut img = image::open(source)?;
        let (width, height) = img.dimensions();
        if width > BANNER_MAX_WIDTH || height > BANNER_MAX_HEIGHT {
            img = img.thumbnail(BANNER_MAX_WIDTH, BANNER_MAX_HEIGHT);
        }

        fs::create_dir_all(&self.dir)?;
        let dest = self.path_for(task_id);
        img.save_with_format(&dest, ImageFormat::Png)?;

        tracing::debug!(task_id, source = %source.display(), dest = %dest.display(), width = img.width(), height = img.height(), "banner imported");
        Ok(dest)
    }

    /// Deletes a stored banner; a file that is already gone is not an error.
    pub fn remove(&self, path: &Path) -> Result<(), BannerError> {
        if path.exists() {
            fs::remove_file(path)?;
            tracing::debug!(path = %path.display(), "banner removed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_name_is_derived_from_task_id() {
        let banners = BannerStore::at("/data/images");
        assert_eq!(banners.path_for(42), PathBuf::from("/data/images/task_42_banner.png"));
    }

    #[test]
    fn missing_source_is_reported() {
        let temp_dir = tempfile::tempdir().unwrap();
        let banners = BannerStore::at(temp_dir.path());

        let result = banners.import(1, &temp_dir.path().join("nope.png"));

        assert!(matches!(result, Err(BannerError::SourceNotFound { .. })));
    }
}
