use std::path::PathBuf;

use clap::Parser;
use display_prep::ResizeFilter;

#[derive(Debug, Parser)]
#[command(
    name = "show-image",
    version,
    about = "Prepare an image for an e-paper panel and show it"
)]
pub struct CliArgs {
    /// Path to the image to display
    pub image_file_path: PathBuf,

    /// Banner text to overlay on top of the image
    #[arg(short, long)]
    pub message: Option<String>,

    /// Panel width in pixels (overrides DISPLAY_WIDTH)
    #[arg(long)]
    pub width: Option<String>,

    /// Panel height in pixels (overrides DISPLAY_HEIGHT)
    #[arg(long)]
    pub height: Option<String>,

    /// Background fill around the image: #rrggbb, r,g,b, black or white
    /// (overrides PADDING_COLOR)
    #[arg(long)]
    pub padding_color: Option<String>,

    /// Monospace TTF/OTF font for the banner (overrides BANNER_FONT)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Where the preview panel writes the rendered frame (overrides PREVIEW_OUTPUT)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Resampling filter: nearest, bilinear, bicubic, gaussian or lanczos3
    /// (overrides RESIZE_FILTER)
    #[arg(long)]
    pub filter: Option<ResizeFilter>,
}
