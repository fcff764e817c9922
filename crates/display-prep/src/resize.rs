//! Aspect-preserving resize onto the target surface.
//!
//! The fitted size is computed in `f64` and truncated toward zero, so a
//! source is never scaled past the target in either axis.

use std::fmt;
use std::str::FromStr;

use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::dimensions::TargetDimensions;
use crate::error::{PrepareError, Result};

/// Resampling filter used when scaling the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    Nearest,
    Bilinear,
    #[default]
    Bicubic,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Bilinear => FilterType::Triangle,
            ResizeFilter::Bicubic => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl FromStr for ResizeFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "bilinear" | "triangle" => Ok(Self::Bilinear),
            "bicubic" | "catmullrom" => Ok(Self::Bicubic),
            "gaussian" => Ok(Self::Gaussian),
            "lanczos" | "lanczos3" => Ok(Self::Lanczos3),
            other => Err(format!("unknown resize filter '{other}'")),
        }
    }
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
            Self::Bicubic => "bicubic",
            Self::Gaussian => "gaussian",
            Self::Lanczos3 => "lanczos3",
        };
        f.write_str(name)
    }
}

/// Compute the size a `source` image takes when fitted inside `target`.
///
/// If the target is relatively wider than the source, the result spans the
/// full target height; otherwise it spans the full target width. The other
/// axis is truncated, and clamped to one pixel for extreme aspect ratios.
pub fn fit_dimensions(source: (u32, u32), target: TargetDimensions) -> Result<(u32, u32)> {
    let (src_w, src_h) = source;
    if src_w == 0 || src_h == 0 {
        return Err(PrepareError::invalid_dimensions(src_w, src_h, "source"));
    }

    let source_ratio = f64::from(src_w) / f64::from(src_h);

    let fitted = if target.aspect_ratio() > source_ratio {
        let new_width = f64::from(src_w) * f64::from(target.height()) / f64::from(src_h);
        ((new_width as u32).max(1), target.height())
    } else {
        let new_height = f64::from(src_h) * f64::from(target.width()) / f64::from(src_w);
        (target.width(), (new_height as u32).max(1))
    };

    Ok(fitted)
}

/// Resize `img` to fit inside `target` without distorting it.
///
/// Returns the image unchanged if it already has the fitted size.
pub fn scale_to_fit(
    img: RgbImage,
    target: TargetDimensions,
    filter: ResizeFilter,
) -> Result<RgbImage> {
    let (orig_w, orig_h) = img.dimensions();
    let (new_width, new_height) = fit_dimensions((orig_w, orig_h), target)?;

    if (new_width, new_height) == (orig_w, orig_h) {
        debug!(orig_w, orig_h, "Image already fits target, skipping resize");
        return Ok(img);
    }

    debug!(
        orig_w,
        orig_h,
        new_width,
        new_height,
        %filter,
        "Resizing image to fit target"
    );

    Ok(imageops::resize(&img, new_width, new_height, filter.into()))
}
