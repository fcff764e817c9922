//! Image preparation for fixed-resolution e-paper panels.
//!
//! Scales a source image to fit the panel without distortion, centers it on
//! a padded background, optionally stamps a text banner across the top, and
//! mirrors the result for panels that present their input flipped.

pub mod banner;
pub mod compose;
pub mod dimensions;
pub mod error;
pub mod mirror;
pub mod pipeline;
pub mod resize;
pub mod source;

// Re-exports for convenience
pub use banner::{BannerFont, banner_enabled, draw_banner};
pub use compose::{center_offsets, center_on_background};
pub use dimensions::TargetDimensions;
pub use error::{PrepareError, Result};
pub use mirror::mirror_horizontal;
pub use pipeline::{PipelineConfig, prepare, prepare_file};
pub use resize::{ResizeFilter, fit_dimensions, scale_to_fit};
pub use source::load_source;

/// Default fill for background area not covered by the scaled image.
pub const DEFAULT_PADDING_COLOR: image::Rgb<u8> = image::Rgb([0, 0, 0]);
