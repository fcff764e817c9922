pub mod cli;
pub mod config;
pub mod display;

use anyhow::Context;

use cli::CliArgs;
use config::AppConfig;
use display::{Display, PreviewDisplay};

/// Resolve configuration, then prepare and show the image on the preview panel.
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    config::load_dotenv();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    config
        .apply_args(&args)
        .context("Invalid command-line option")?;

    let mut panel = PreviewDisplay::new(
        config.display_width,
        config.display_height,
        config.preview_output.clone(),
    );
    show_image(&mut panel, &args, &config)
}

/// Prepare the image named in `args` for `panel` and display it.
///
/// The panel's reported resolution sets the target size. The panel is
/// closed whether or not preparation succeeds.
pub fn show_image<D: Display>(
    panel: &mut D,
    args: &CliArgs,
    config: &AppConfig,
) -> anyhow::Result<()> {
    panel.prepare().context("Failed to prepare display")?;
    tracing::info!(
        width = panel.width(),
        height = panel.height(),
        "Prepared display."
    );

    let shown = prepare_and_display(panel, args, config);
    let closed = panel.close().context("Failed to close display");
    shown?;
    closed?;

    tracing::info!("Updated display & exiting.");
    Ok(())
}

fn prepare_and_display<D: Display>(
    panel: &mut D,
    args: &CliArgs,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let pipeline = config
        .pipeline_config(panel.width(), panel.height(), args.message.as_deref())
        .context("Display reported an unusable resolution")?;

    let frame = display_prep::prepare_file(&args.image_file_path, &pipeline)
        .with_context(|| format!("Failed to prepare {}", args.image_file_path.display()))?;
    tracing::info!("Prepared image.");

    panel.display(&frame).context("Failed to update display")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use display::DisplayError;
    use image::{Rgb, RgbImage};

    /// Panel that keeps every frame it is asked to show.
    #[derive(Default)]
    struct RecordingDisplay {
        width: u32,
        height: u32,
        frames: Vec<RgbImage>,
        closed: bool,
    }

    impl Display for RecordingDisplay {
        fn prepare(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }

        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn display(&mut self, frame: &RgbImage) -> Result<(), DisplayError> {
            self.frames.push(frame.clone());
            Ok(())
        }

        fn close(&mut self) -> Result<(), DisplayError> {
            self.closed = true;
            Ok(())
        }
    }

    fn panel(width: u32, height: u32) -> RecordingDisplay {
        RecordingDisplay {
            width,
            height,
            ..Default::default()
        }
    }

    #[test]
    fn shows_prepared_frame_at_panel_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        RgbImage::from_pixel(800, 600, Rgb([200, 10, 10]))
            .save(&path)
            .unwrap();

        let args = CliArgs::try_parse_from(["show-image", path.to_str().unwrap()]).unwrap();
        let config = AppConfig {
            resize_filter: display_prep::ResizeFilter::Nearest,
            ..AppConfig::default()
        };
        let mut display = panel(1200, 825);
        show_image(&mut display, &args, &config).unwrap();

        assert!(display.closed);
        assert_eq!(display.frames.len(), 1);
        let frame = &display.frames[0];
        assert_eq!(frame.dimensions(), (1200, 825));
        assert_eq!(frame.get_pixel(49, 400), &Rgb([0, 0, 0]));
        assert_eq!(frame.get_pixel(1150, 400), &Rgb([0, 0, 0]));
        assert_eq!(frame.get_pixel(600, 400), &Rgb([200, 10, 10]));
    }

    #[test]
    fn missing_image_closes_panel_without_showing() {
        let args = CliArgs::try_parse_from(["show-image", "/nonexistent/photo.png"]).unwrap();
        let mut display = panel(100, 100);

        let err = show_image(&mut display, &args, &AppConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/photo.png"));
        assert!(display.frames.is_empty());
        assert!(display.closed);
    }

    #[test]
    fn zero_resolution_panel_is_rejected() {
        let args = CliArgs::try_parse_from(["show-image", "a.png"]).unwrap();
        let mut display = panel(0, 825);
        assert!(show_image(&mut display, &args, &AppConfig::default()).is_err());
        assert!(display.frames.is_empty());
    }
}
