//! Source image loading.

use std::path::Path;

use image::{ImageReader, RgbImage};
use tracing::debug;

use crate::error::{PrepareError, Result};

/// Open and decode the image at `path` as 8-bit RGB.
///
/// The format is detected from the file contents. Any alpha channel is
/// dropped.
pub fn load_source(path: &Path) -> Result<RgbImage> {
    let load_err = |source: image::ImageError| PrepareError::SourceLoad {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .map_err(|e| load_err(e.into()))?
        .with_guessed_format()
        .map_err(|e| load_err(e.into()))?
        .decode()
        .map_err(load_err)?;

    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(PrepareError::invalid_dimensions(width, height, "source"));
    }

    debug!(width, height, color = ?img.color(), path = %path.display(), "Loaded source image");
    Ok(img.to_rgb8())
}
