//! The preparation pipeline: scale, center, annotate, mirror.
//!
//! Each stage takes ownership of the previous stage's image and returns a
//! new one. A failing stage aborts the run and nothing is returned.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tracing::{debug, info};

use crate::DEFAULT_PADDING_COLOR;
use crate::banner::{self, BannerFont};
use crate::compose;
use crate::dimensions::TargetDimensions;
use crate::error::Result;
use crate::mirror;
use crate::resize::{self, ResizeFilter};
use crate::source;

/// Settings for a single pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Size of the destination surface.
    pub target: TargetDimensions,

    /// Fill for the area around the scaled image.
    pub padding_color: Rgb<u8>,

    /// Banner text. Shown only when longer than one character.
    pub banner: Option<String>,

    /// Banner font file. Falls back to an installed monospace font.
    pub font_path: Option<PathBuf>,

    /// Resampling filter for the scaling stage.
    pub filter: ResizeFilter,
}

impl PipelineConfig {
    pub fn new(target: TargetDimensions) -> Self {
        Self {
            target,
            padding_color: DEFAULT_PADDING_COLOR,
            banner: None,
            font_path: None,
            filter: ResizeFilter::default(),
        }
    }

    /// Builder: set padding color.
    pub fn with_padding_color(mut self, color: Rgb<u8>) -> Self {
        self.padding_color = color;
        self
    }

    /// Builder: set banner text.
    pub fn with_banner(mut self, text: Option<impl Into<String>>) -> Self {
        self.banner = text.map(Into::into);
        self
    }

    /// Builder: set banner font path.
    pub fn with_font_path(mut self, path: Option<PathBuf>) -> Self {
        self.font_path = path;
        self
    }

    /// Builder: set resize filter.
    pub fn with_filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The banner text, if it is long enough to be drawn.
    pub fn banner_text(&self) -> Option<&str> {
        let text = self.banner.as_deref();
        banner::banner_enabled(text).then_some(text).flatten()
    }
}

/// Run every stage on `source` and return the display-ready image.
pub fn prepare(source: RgbImage, config: &PipelineConfig) -> Result<RgbImage> {
    let (src_w, src_h) = source.dimensions();
    let target = config.target;

    let scaled = resize::scale_to_fit(source, target, config.filter)?;
    let composed = compose::center_on_background(scaled, target, config.padding_color)?;

    let annotated = match config.banner_text() {
        Some(text) => {
            let font = BannerFont::locate(config.font_path.as_deref())?;
            banner::draw_banner(composed, text, &font)
        }
        None => {
            debug!("No banner text, skipping annotation");
            composed
        }
    };

    let prepared = mirror::mirror_horizontal(&annotated);

    info!(
        src_w,
        src_h,
        width = prepared.width(),
        height = prepared.height(),
        banner = config.banner_text().is_some(),
        "Pipeline complete"
    );
    Ok(prepared)
}

/// Load the image at `path` and run it through [`prepare`].
pub fn prepare_file(path: &Path, config: &PipelineConfig) -> Result<RgbImage> {
    let source = source::load_source(path)?;
    prepare(source, config)
}
