//! Centering a scaled image on a padded background of the target size.

use image::{Rgb, RgbImage};
use image::imageops;
use tracing::{debug, error};

use crate::dimensions::TargetDimensions;
use crate::error::{PrepareError, Result};

/// Offsets that center an `inner` extent inside an `outer` extent.
///
/// Odd leftovers go to the right and bottom edges. An `inner` extent larger
/// than `outer` in either axis is a broken scaling contract and is reported
/// rather than clipped.
pub fn center_offsets(inner: (u32, u32), outer: (u32, u32)) -> Result<(u32, u32)> {
    let spare = (outer.0.checked_sub(inner.0), outer.1.checked_sub(inner.1));
    let (Some(spare_x), Some(spare_y)) = spare else {
        error!(
            inner_w = inner.0,
            inner_h = inner.1,
            outer_w = outer.0,
            outer_h = outer.1,
            "Scaled image exceeds background"
        );
        return Err(PrepareError::CompositionInvariant { inner, outer });
    };

    Ok((spare_x / 2, spare_y / 2))
}

/// Paste `img` at the center of a `target`-sized canvas filled with `padding`.
///
/// Destination pixels under the image are replaced outright, with no blending.
pub fn center_on_background(
    img: RgbImage,
    target: TargetDimensions,
    padding: Rgb<u8>,
) -> Result<RgbImage> {
    let (x_offset, y_offset) = center_offsets(img.dimensions(), target.into())?;

    debug!(
        w = img.width(),
        h = img.height(),
        x_offset,
        y_offset,
        "Centering image on background"
    );

    let mut canvas = RgbImage::from_pixel(target.width(), target.height(), padding);
    imageops::replace(&mut canvas, &img, i64::from(x_offset), i64::from(y_offset));
    Ok(canvas)
}
