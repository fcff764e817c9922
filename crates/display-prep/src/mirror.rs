//! Left-right mirroring for panels that present their input flipped.

use image::RgbImage;
use image::imageops;
use tracing::debug;

/// Flip an image horizontally.
///
/// Panels viewed through a light guide show their frame buffer mirrored, so
/// the prepared image is flipped once more to read correctly on the device.
pub fn mirror_horizontal(img: &RgbImage) -> RgbImage {
    let (w, h) = img.dimensions();
    debug!(w, h, "Mirroring image left-right");
    imageops::flip_horizontal(img)
}
