//! Output panels that show a prepared frame.
//!
//! Real panels are reached through their own drivers; this crate ships a
//! preview panel that renders the frame to a PNG file instead.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

/// Errors that can occur while driving a panel.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("Display used before prepare()")]
    NotPrepared,

    #[error("Frame is {actual_w}x{actual_h}, panel expects {expected_w}x{expected_h}")]
    FrameSize {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },

    #[error("Failed to write preview {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A fixed-resolution output surface.
pub trait Display {
    /// Wake and initialize the panel.
    fn prepare(&mut self) -> Result<(), DisplayError>;

    /// Native width in pixels.
    fn width(&self) -> u32;

    /// Native height in pixels.
    fn height(&self) -> u32;

    /// Show `frame`, which must match the native resolution.
    fn display(&mut self, frame: &RgbImage) -> Result<(), DisplayError>;

    /// Put the panel to sleep.
    fn close(&mut self) -> Result<(), DisplayError>;
}

/// Panel stand-in that writes each frame to a PNG file.
#[derive(Debug)]
pub struct PreviewDisplay {
    width: u32,
    height: u32,
    output: PathBuf,
    prepared: bool,
}

impl PreviewDisplay {
    pub fn new(width: u32, height: u32, output: impl Into<PathBuf>) -> Self {
        Self {
            width,
            height,
            output: output.into(),
            prepared: false,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Display for PreviewDisplay {
    fn prepare(&mut self) -> Result<(), DisplayError> {
        tracing::debug!(
            width = self.width,
            height = self.height,
            output = %self.output.display(),
            "Preview display ready"
        );
        self.prepared = true;
        Ok(())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn display(&mut self, frame: &RgbImage) -> Result<(), DisplayError> {
        if !self.prepared {
            return Err(DisplayError::NotPrepared);
        }
        if frame.dimensions() != (self.width, self.height) {
            return Err(DisplayError::FrameSize {
                expected_w: self.width,
                expected_h: self.height,
                actual_w: frame.width(),
                actual_h: frame.height(),
            });
        }

        frame
            .save_with_format(&self.output, ImageFormat::Png)
            .map_err(|source| DisplayError::Write {
                path: self.output.clone(),
                source,
            })?;
        tracing::info!(output = %self.output.display(), "Wrote preview frame");
        Ok(())
    }

    fn close(&mut self) -> Result<(), DisplayError> {
        self.prepared = false;
        Ok(())
    }
}
