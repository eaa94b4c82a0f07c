//! Image decoding and PNG export at the filesystem boundary

use crate::io::error::{CompositeError, Result};
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Decode an image file of any supported format
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| CompositeError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a composited image, creating parent directories as needed
///
/// The format is chosen from the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_image(img: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CompositeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| CompositeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
