//! PNG input and output.

use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::error::{IconError, Result};
use crate::process::blank;

/// Load a PNG (or any format `image` understands) as RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(IconError::Io {
            path: path.to_path_buf(),
            message: "File not found".to_string(),
        });
    }

    let img = image::open(path).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to load image: {}", e),
    })?;

    Ok(img.to_rgba8())
}

/// Write an RGBA buffer as PNG, creating parent directories as needed.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

/// Write a fully transparent `size` x `size` PNG.
pub fn write_placeholder(size: u32, path: &Path) -> Result<()> {
    write_png(&blank(size, size), path)
}

/// Create a directory and its parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| IconError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}

/// Copy a finished asset to another location.
pub fn copy_asset(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::copy(from, to).map_err(|e| IconError::Io {
        path: to.to_path_buf(),
        message: format!("Failed to copy {}: {}", from.display(), e),
    })?;
    Ok(())
}
