#[cfg(test)]
mod tests {
    use image::{GenericImageView, ImageFormat, RgbImage};
    use std::path::{Path, PathBuf};
    use taskdesk::libs::banner::{BannerStore, BANNER_MAX_HEIGHT, BANNER_MAX_WIDTH};
    use taskdesk::libs::error::BannerError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct BannerTestContext {
        temp_dir: TempDir,
        banners: BannerStore,
    }

    impl TestContext for BannerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let banners = BannerStore::at(temp_dir.path().join("images"));
            BannerTestContext { temp_dir, banners }
        }
    }

    fn write_image(dir: &Path, name: &str, width: u32, height: u32, format: ImageFormat) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(width, height, image::Rgb([30, 120, 200])).save_with_format(&path, format).unwrap();
        path
    }

    #[test_context(BannerTestContext)]
    #[test]
    fn test_large_image_is_shrunk_to_fit(ctx: &mut BannerTestContext) {
        let source = write_image(ctx.temp_dir.path(), "wide.png", 1600, 400, ImageFormat::Png);

        let stored = ctx.banners.import(3, &source).unwrap();

        assert_eq!(stored, ctx.banners.path_for(3));
        let (width, height) = image::open(&stored).unwrap().dimensions();
        assert!(width <= BANNER_MAX_WIDTH && height <= BANNER_MAX_HEIGHT);
        // Aspect ratio is kept: 1600x400 -> 800x200
        assert_eq!((width, height), (800, 200));
    }

    #[test_context(BannerTestContext)]
    #[test]
    fn test_small_image_is_not_enlarged(ctx: &mut BannerTestContext) {
        let source = write_image(ctx.temp_dir.path(), "small.bmp", 120, 60, ImageFormat::Bmp);

        let stored = ctx.banners.import(1, &source).unwrap();

        assert_eq!(image::open(&stored).unwrap().dimensions(), (120, 60));
        assert_eq!(image::ImageReader::open(&stored).unwrap().with_guessed_format().unwrap().format(), Some(ImageFormat::Png));
    }

    #[test_context(BannerTestContext)]
    #[test]
    fn test_import_replaces_previous_banner(ctx: &mut BannerTestContext) {
        let first = write_image(ctx.temp_dir.path(), "first.png", 100, 100, ImageFormat::Png);
        let second = write_image(ctx.temp_dir.path(), "second.png", 200, 50, ImageFormat::Png);

        ctx.banners.import(5, &first).unwrap();
        let stored = ctx.banners.import(5, &second).unwrap();

        assert_eq!(image::open(&stored).unwrap().dimensions(), (200, 50));
    }

    #[test_context(BannerTestContext)]
    #[test]
    fn test_non_image_is_rejected(ctx: &mut BannerTestContext) {
        let source = ctx.temp_dir.path().join("notes.png");
        std::fs::write(&source, "plain text").unwrap();

        assert!(matches!(ctx.banners.import(2, &source), Err(BannerError::Image(_))));
        assert!(!ctx.banners.path_for(2).exists());
    }

    #[test_context(BannerTestContext)]
    #[test]
    fn test_remove_tolerates_missing_file(ctx: &mut BannerTestContext) {
        let source = write_image(ctx.temp_dir.path(), "gone.png", 10, 10, ImageFormat::Png);
        let stored = ctx.banners.import(4, &source).unwrap();

        ctx.banners.remove(&stored).unwrap();
        assert!(!stored.exists());
        ctx.banners.remove(&stored).unwrap();
    }
}
