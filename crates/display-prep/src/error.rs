//! Errors raised while preparing an image for display.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, PrepareError>;

/// Every variant is terminal: the pipeline aborts and no image is produced.
#[derive(Debug, thiserror::Error)]
pub enum PrepareError {
    #[error("Failed to load source image {}: {source}", .path.display())]
    SourceLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid dimensions for {context}: {width}x{height} (both must be positive)")]
    InvalidDimensions {
        width: u32,
        height: u32,
        context: &'static str,
    },

    #[error("Failed to load banner font {font}: {reason}")]
    FontResource { font: String, reason: String },

    #[error(
        "Scaled image {}x{} does not fit background {}x{}",
        .inner.0, .inner.1, .outer.0, .outer.1
    )]
    CompositionInvariant { inner: (u32, u32), outer: (u32, u32) },
}

impl PrepareError {
    pub(crate) fn invalid_dimensions(width: u32, height: u32, context: &'static str) -> Self {
        PrepareError::InvalidDimensions {
            width,
            height,
            context,
        }
    }
}
