//! Setting value validation.

use std::sync::LazyLock;

use display_prep::ResizeFilter;
use image::Rgb;
use regex::Regex;

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$").unwrap());
static RE_RGB_TRIPLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*$").unwrap());

/// Largest panel edge accepted from configuration.
pub const MAX_DISPLAY_EDGE: u32 = 16384;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "DISPLAY_WIDTH" | "DISPLAY_HEIGHT" => {
            parse_display_edge(value)?;
        }
        "PADDING_COLOR" => {
            parse_color(value)?;
        }
        "RESIZE_FILTER" => {
            value.parse::<ResizeFilter>()?;
        }
        "BANNER_FONT" | "PREVIEW_OUTPUT" => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        _ => {}
    }
    Ok(())
}

/// Parse a panel width or height.
pub fn parse_display_edge(value: &str) -> Result<u32, String> {
    let v: u32 = value.trim().parse().map_err(|_| "must be a positive integer")?;
    if v == 0 || v > MAX_DISPLAY_EDGE {
        return Err(format!("must be between 1 and {MAX_DISPLAY_EDGE}"));
    }
    Ok(v)
}

/// Parse a color as `#rrggbb`, `rrggbb`, `r,g,b`, `black` or `white`.
pub fn parse_color(value: &str) -> Result<Rgb<u8>, String> {
    let value = value.trim();
    match value.to_ascii_lowercase().as_str() {
        "black" => return Ok(Rgb([0, 0, 0])),
        "white" => return Ok(Rgb([255, 255, 255])),
        _ => {}
    }

    if let Some(caps) = RE_HEX_COLOR.captures(value) {
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).map_err(|e| e.to_string());
        return Ok(Rgb([channel(1)?, channel(2)?, channel(3)?]));
    }

    if let Some(caps) = RE_RGB_TRIPLET.captures(value) {
        let channel = |i: usize| {
            caps[i]
                .parse::<u8>()
                .map_err(|_| format!("channel '{}' must be between 0 and 255", &caps[i]))
        };
        return Ok(Rgb([channel(1)?, channel(2)?, channel(3)?]));
    }

    Err(format!(
        "unrecognized color '{value}' (expected #rrggbb, r,g,b, black or white)"
    ))
}
