//! Runtime configuration loaded from the environment with CLI overrides.

use std::path::PathBuf;

use display_prep::{DEFAULT_PADDING_COLOR, PipelineConfig, ResizeFilter, TargetDimensions};
use image::Rgb;

use super::ConfigError;
use super::validation::{parse_color, parse_display_edge, validate_setting};
use crate::cli::CliArgs;

/// Default panel: a 1200x825 IT8951-driven e-paper display.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 1200;
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 825;
pub const DEFAULT_PREVIEW_OUTPUT: &str = "display-preview.png";

/// Runtime configuration for a single `show-image` run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub display_width: u32,
    pub display_height: u32,
    pub padding_color: Rgb<u8>,
    pub banner_font: Option<PathBuf>,
    pub preview_output: PathBuf,
    pub resize_filter: ResizeFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_width: DEFAULT_DISPLAY_WIDTH,
            display_height: DEFAULT_DISPLAY_HEIGHT,
            padding_color: DEFAULT_PADDING_COLOR,
            banner_font: None,
            preview_output: PathBuf::from(DEFAULT_PREVIEW_OUTPUT),
            resize_filter: ResizeFilter::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration from `lookup`; unset or empty keys keep their defaults.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let g = |key: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(key).filter(|v| !v.is_empty()) {
                Some(value) => {
                    validate_setting(key, &value).map_err(|reason| ConfigError::Invalid {
                        key,
                        value: value.clone(),
                        reason,
                    })?;
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        };

        let mut config = Self::default();
        config.set_display_width(g("DISPLAY_WIDTH")?.as_deref())?;
        config.set_display_height(g("DISPLAY_HEIGHT")?.as_deref())?;
        config.set_padding_color(g("PADDING_COLOR")?.as_deref())?;
        config.set_resize_filter(g("RESIZE_FILTER")?.as_deref())?;
        if let Some(font) = g("BANNER_FONT")? {
            config.banner_font = Some(PathBuf::from(font));
        }
        if let Some(output) = g("PREVIEW_OUTPUT")? {
            config.preview_output = PathBuf::from(output);
        }
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn apply_args(&mut self, args: &CliArgs) -> Result<(), ConfigError> {
        self.set_display_width(args.width.as_deref())?;
        self.set_display_height(args.height.as_deref())?;
        self.set_padding_color(args.padding_color.as_deref())?;
        if let Some(filter) = args.filter {
            self.resize_filter = filter;
        }
        if let Some(font) = &args.font {
            self.banner_font = Some(font.clone());
        }
        if let Some(output) = &args.output {
            self.preview_output = output.clone();
        }
        Ok(())
    }

    /// Pipeline settings for a panel of `width` x `height`.
    pub fn pipeline_config(
        &self,
        width: u32,
        height: u32,
        banner: Option<&str>,
    ) -> display_prep::Result<PipelineConfig> {
        let target = TargetDimensions::new(width, height)?;
        Ok(PipelineConfig::new(target)
            .with_padding_color(self.padding_color)
            .with_banner(banner)
            .with_font_path(self.banner_font.clone())
            .with_filter(self.resize_filter))
    }

    fn set_display_width(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(v) = value {
            self.display_width =
                parse_display_edge(v).map_err(|r| invalid("DISPLAY_WIDTH", v, r))?;
        }
        Ok(())
    }

    fn set_display_height(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(v) = value {
            self.display_height =
                parse_display_edge(v).map_err(|r| invalid("DISPLAY_HEIGHT", v, r))?;
        }
        Ok(())
    }

    fn set_padding_color(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(v) = value {
            self.padding_color = parse_color(v).map_err(|r| invalid("PADDING_COLOR", v, r))?;
        }
        Ok(())
    }

    fn set_resize_filter(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(v) = value {
            self.resize_filter = v.parse().map_err(|r| invalid("RESIZE_FILTER", v, r))?;
        }
        Ok(())
    }
}

fn invalid(key: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::load_from(env(&[])).unwrap();
        assert_eq!(config.display_width, 1200);
        assert_eq!(config.display_height, 825);
        assert_eq!(config.padding_color, Rgb([0, 0, 0]));
        assert_eq!(config.resize_filter, ResizeFilter::Bicubic);
        assert_eq!(config.preview_output, PathBuf::from("display-preview.png"));
        assert!(config.banner_font.is_none());
    }

    #[test]
    fn environment_values_are_applied() {
        let config = AppConfig::load_from(env(&[
            ("DISPLAY_WIDTH", "1872"),
            ("DISPLAY_HEIGHT", "1404"),
            ("PADDING_COLOR", "#ffffff"),
            ("RESIZE_FILTER", "lanczos3"),
            ("BANNER_FONT", "/fonts/mono.ttf"),
            ("PREVIEW_OUTPUT", "/tmp/panel.png"),
        ]))
        .unwrap();
        assert_eq!((config.display_width, config.display_height), (1872, 1404));
        assert_eq!(config.padding_color, Rgb([255, 255, 255]));
        assert_eq!(config.resize_filter, ResizeFilter::Lanczos3);
        assert_eq!(config.banner_font, Some(PathBuf::from("/fonts/mono.ttf")));
        assert_eq!(config.preview_output, PathBuf::from("/tmp/panel.png"));
    }

    #[test]
    fn empty_values_keep_defaults() {
        let config = AppConfig::load_from(env(&[("DISPLAY_WIDTH", "")])).unwrap();
        assert_eq!(config.display_width, DEFAULT_DISPLAY_WIDTH);
    }

    #[test]
    fn invalid_environment_value_is_reported() {
        let err = AppConfig::load_from(env(&[("DISPLAY_HEIGHT", "0")])).unwrap_err();
        let ConfigError::Invalid { key, value, .. } = err;
        assert_eq!(key, "DISPLAY_HEIGHT");
        assert_eq!(value, "0");
    }

    #[test]
    fn cli_flags_override_environment() {
        let mut config =
            AppConfig::load_from(env(&[("DISPLAY_WIDTH", "1872"), ("PADDING_COLOR", "white")]))
                .unwrap();
        let args = CliArgs::try_parse_from([
            "show-image",
            "a.png",
            "--width",
            "800",
            "--padding-color",
            "10,20,30",
            "--font",
            "/fonts/other.ttf",
        ])
        .unwrap();
        config.apply_args(&args).unwrap();

        assert_eq!(config.display_width, 800);
        assert_eq!(config.display_height, DEFAULT_DISPLAY_HEIGHT);
        assert_eq!(config.padding_color, Rgb([10, 20, 30]));
        assert_eq!(config.banner_font, Some(PathBuf::from("/fonts/other.ttf")));
    }

    #[test]
    fn invalid_cli_flag_is_reported() {
        let mut config = AppConfig::default();
        let args = CliArgs::try_parse_from(["show-image", "a.png", "--height", "tall"]).unwrap();
        assert!(config.apply_args(&args).is_err());
    }

    #[test]
    fn pipeline_config_carries_settings() {
        let config = AppConfig {
            padding_color: Rgb([9, 9, 9]),
            resize_filter: ResizeFilter::Nearest,
            ..AppConfig::default()
        };
        let pipeline = config.pipeline_config(800, 600, Some("Hi there")).unwrap();
        assert_eq!(pipeline.target, TargetDimensions::new(800, 600).unwrap());
        assert_eq!(pipeline.padding_color, Rgb([9, 9, 9]));
        assert_eq!(pipeline.filter, ResizeFilter::Nearest);
        assert_eq!(pipeline.banner_text(), Some("Hi there"));
    }

    #[test]
    fn pipeline_config_rejects_zero_panel() {
        assert!(AppConfig::default().pipeline_config(0, 600, None).is_err());
    }
}
