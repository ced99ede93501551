//! Tests for image loading and PNG export

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use seamcut::SeamError;
    use seamcut::io::image::{load_rgba, save_rgba};
    use tempfile::TempDir;

    // Tests that a saved image loads back with identical pixels
    // Verified by disabling file save operation
    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tile.png");
        let image = RgbaImage::from_fn(3, 2, |x, y| {
            Rgba([u8::try_from(x * 40).unwrap_or(0), u8::try_from(y * 90).unwrap_or(0), 7, 255])
        });

        save_rgba(&image, &path).unwrap();
        let loaded = load_rgba(&path).unwrap();

        assert_eq!(loaded, image);
    }

    // Tests that missing parent directories are created
    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.png");

        save_rgba(&RgbaImage::new(1, 1), &path).unwrap();

        assert!(path.exists());
    }

    // Tests that a missing file reports the path it tried
    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.png");

        match load_rgba(&path) {
            Err(SeamError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            _ => unreachable!("Expected ImageLoad error type"),
        }
    }

    // Tests that an unknown extension fails export
    #[test]
    fn test_save_unknown_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.unknownformat");

        assert!(matches!(
            save_rgba(&RgbaImage::new(1, 1), &path),
            Err(SeamError::ImageExport { .. })
        ));
    }

    // Tests that a failed directory creation names the directory it tried
    // Verified by reporting a placeholder path instead
    #[test]
    fn test_save_reports_blocked_directory() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        match save_rgba(&RgbaImage::new(1, 1), blocker.join("out.png")) {
            Err(SeamError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, blocker);
                assert_eq!(operation, "create directory");
            }
            _ => unreachable!("Expected FileSystem error type"),
        }
    }
}
