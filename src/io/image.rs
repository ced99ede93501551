//! Image loading and PNG export for the command-line driver

use crate::io::error::{Result, SeamError};
use image::RgbaImage;
use std::path::Path;

/// Load an image from disk as 8-bit RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| SeamError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Save an RGBA image, creating the parent directory when needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_rgba<P: AsRef<Path>>(img: &RgbaImage, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| SeamError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| SeamError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %output_path.display(), "Saved image");
    Ok(())
}
