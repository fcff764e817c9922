//! Target surface dimensions.

use crate::error::{PrepareError, Result};

/// Pixel width and height of the destination surface. Both are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDimensions {
    width: u32,
    height: u32,
}

impl TargetDimensions {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PrepareError::invalid_dimensions(width, height, "target"));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl From<TargetDimensions> for (u32, u32) {
    fn from(dims: TargetDimensions) -> Self {
        (dims.width, dims.height)
    }
}
