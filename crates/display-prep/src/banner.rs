//! Text banner across the top of the prepared image.
//!
//! The banner is a solid black strip with one line of white monospace text.
//! Geometry is fixed: the strip covers rows `0..=BANNER_BOTTOM`, and text
//! starts at `TEXT_ORIGIN` at `FONT_SIZE` pixels per em.

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use tracing::{debug, warn};

use crate::error::{PrepareError, Result};

/// Last row covered by the banner strip (inclusive).
pub const BANNER_BOTTOM: u32 = 75;

/// Top-left corner of the banner text.
pub const TEXT_ORIGIN: (i32, i32) = (10, 30);

/// Banner font size, in pixels per em.
pub const FONT_SIZE: f32 = 36.0;

const BANNER_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Monospace fonts tried in order when no font path is configured.
pub const MONOSPACE_FONT_CANDIDATES: &[&str] = &[
    "Pillow/Tests/fonts/FreeMono.ttf",
    "/usr/share/fonts/truetype/freefont/FreeMono.ttf",
    "/usr/share/fonts/gnu-free/FreeMono.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// Whether `text` warrants a banner: present and longer than one character.
pub fn banner_enabled(text: Option<&str>) -> bool {
    text.is_some_and(|t| t.chars().count() > 1)
}

/// An owned, parsed banner font. Dropping it releases the font data.
pub struct BannerFont {
    font: FontVec,
    origin: PathBuf,
}

impl std::fmt::Debug for BannerFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BannerFont")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl BannerFont {
    /// Read and parse a TTF/OTF file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| PrepareError::FontResource {
            font: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let font = FontVec::try_from_vec(data).map_err(|e| PrepareError::FontResource {
            font: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "Loaded banner font");
        Ok(Self {
            font,
            origin: path.to_path_buf(),
        })
    }

    /// Load `explicit` if given, otherwise the first installed monospace
    /// font from [`MONOSPACE_FONT_CANDIDATES`].
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        MONOSPACE_FONT_CANDIDATES
            .iter()
            .map(Path::new)
            .find(|p| p.is_file())
            .ok_or_else(|| PrepareError::FontResource {
                font: "default monospace font".into(),
                reason: format!(
                    "none of {} known locations exist",
                    MONOSPACE_FONT_CANDIDATES.len()
                ),
            })
            .and_then(Self::load)
    }

    /// Where the font was loaded from.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Scale at which the em square is `size` pixels tall.
    fn scale_for_em(&self, size: f32) -> PxScale {
        match self.font.units_per_em() {
            Some(units) => PxScale::from(size * self.font.height_unscaled() / units),
            None => PxScale::from(size),
        }
    }
}

/// Measure the pixel width of a string at the given font and scale.
pub fn measure_text_width(font: &impl Font, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

/// Fill the banner strip. Rows past the bottom of a short image are skipped.
fn draw_strip(img: &mut RgbImage) {
    let strip = Rect::at(0, 0).of_size(img.width(), BANNER_BOTTOM + 1);
    draw_filled_rect_mut(img, strip, BANNER_COLOR);
}

/// Stamp `text` in a banner across the top of `img`.
///
/// Text is laid out on a single line. Glyphs running past the right edge
/// are cut off at the image border; this is logged as a warning.
pub fn draw_banner(mut img: RgbImage, text: &str, font: &BannerFont) -> RgbImage {
    let scale = font.scale_for_em(FONT_SIZE);
    let (x, y) = TEXT_ORIGIN;

    let text_width = measure_text_width(&font.font, scale, text);
    let text_right = x as u32 + text_width;
    if text_right > img.width() {
        warn!(
            text_width,
            image_width = img.width(),
            overflow = text_right - img.width(),
            "Banner text runs past the right edge and will be cut off"
        );
    }

    debug!(chars = text.chars().count(), text_width, "Drawing banner");

    draw_strip(&mut img);
    draw_text_mut(&mut img, TEXT_COLOR, x, y, scale, &font.font, text);
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Rgb<u8> = Rgb([90, 90, 90]);

    fn installed_font() -> Option<BannerFont> {
        BannerFont::locate(None).ok()
    }

    #[test]
    fn banner_needs_more_than_one_character() {
        assert!(!banner_enabled(None));
        assert!(!banner_enabled(Some("")));
        assert!(!banner_enabled(Some("x")));
        assert!(!banner_enabled(Some("é")));
        assert!(banner_enabled(Some("ok")));
        assert!(banner_enabled(Some("Do not disturb")));
    }

    #[test]
    fn strip_covers_rows_through_banner_bottom() {
        let mut img = RgbImage::from_pixel(40, 100, GRAY);
        draw_strip(&mut img);

        for x in [0, 20, 39] {
            assert_eq!(img.get_pixel(x, 0), &BANNER_COLOR);
            assert_eq!(img.get_pixel(x, BANNER_BOTTOM), &BANNER_COLOR);
            assert_eq!(img.get_pixel(x, BANNER_BOTTOM + 1), &GRAY);
        }
    }

    #[test]
    fn strip_on_short_image_stays_in_bounds() {
        let mut img = RgbImage::from_pixel(8, 20, GRAY);
        draw_strip(&mut img);
        assert!(img.pixels().all(|p| *p == BANNER_COLOR));
    }

    #[test]
    fn missing_font_file_is_a_font_resource_error() {
        let err = BannerFont::load(Path::new("/nonexistent/FreeMono.ttf")).unwrap_err();
        assert!(matches!(err, PrepareError::FontResource { .. }));
        assert!(err.to_string().contains("/nonexistent/FreeMono.ttf"));
    }

    #[test]
    fn unparseable_font_file_is_a_font_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let err = BannerFont::locate(Some(&path)).unwrap_err();
        assert!(matches!(err, PrepareError::FontResource { .. }));
    }

    #[test]
    fn banner_text_is_drawn_inside_the_strip() {
        let Some(font) = installed_font() else {
            return;
        };
        let img = RgbImage::from_pixel(600, 200, GRAY);
        let out = draw_banner(img, "HELLO", &font);

        assert_eq!(out.dimensions(), (600, 200));
        let lit = out
            .enumerate_pixels()
            .filter(|(_, _, p)| p[0] > 200)
            .collect::<Vec<_>>();
        assert!(!lit.is_empty(), "expected white glyph pixels");
        assert!(lit.iter().all(|(x, y, _)| *x >= 10 && *y >= 30 && *y <= BANNER_BOTTOM));

        // Everything below the strip is untouched.
        for y in (BANNER_BOTTOM + 1)..200 {
            for x in 0..600 {
                assert_eq!(out.get_pixel(x, y), &GRAY);
            }
        }
    }

    #[test]
    fn overflowing_text_is_cut_at_the_border() {
        let Some(font) = installed_font() else {
            return;
        };
        let img = RgbImage::from_pixel(60, 100, GRAY);
        let out = draw_banner(img, "a banner much wider than the image", &font);
        assert_eq!(out.dimensions(), (60, 100));
    }

    #[test]
    fn monospace_advances_are_uniform() {
        let Some(font) = installed_font() else {
            return;
        };
        let scale = font.scale_for_em(FONT_SIZE);
        let narrow = measure_text_width(&font.font, scale, "iiii");
        let wide = measure_text_width(&font.font, scale, "MMMM");
        assert!(narrow.abs_diff(wide) <= 1);
    }
}
