//! Writing finished frames to disk.

use crate::error::CliError;
use donutfractals_core::RgbImage;
use image::{ColorType, ImageFormat};
use std::path::Path;

/// Pick the encoder from the file extension.
pub fn format_for(path: &Path) -> Result<ImageFormat, CliError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => Ok(ImageFormat::Png),
        Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
        _ => Err(CliError::OutputFormat(path.to_path_buf())),
    }
}

pub fn save_image(image: &RgbImage, path: &Path) -> Result<(), CliError> {
    let format = format_for(path)?;
    image::save_buffer_with_format(
        path,
        image.as_bytes(),
        image.width,
        image.height,
        ColorType::Rgb8,
        format,
    )
    .map_err(|source| CliError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Saved {}x{} image to {}",
        image.width,
        image.height,
        path.display()
    );
    Ok(())
}
