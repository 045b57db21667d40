use anyhow::{Context, Result};
use rusttype::{point, Font, Scale};
use std::path::Path;

/// Pixel height TrueType glyphs are rendered at
pub const FONT_PX: f32 = 11.0;

const GLYPH_WIDTH: i32 = 5;
const GLYPH_ADVANCE: i32 = 6;

// 5×7 rows, most significant of the low five bits is the leftmost column
const QUESTION: [u8; 7] = [
    0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100,
];
const EXCLAMATION: [u8; 7] = [
    0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100,
];

/// Where text pixels come from
#[derive(Default)]
pub enum GlyphSource {
    /// Tiny bitmap font compiled into the binary
    #[default]
    Builtin,
    /// A TrueType font loaded at runtime
    TrueType(Font<'static>),
}

impl GlyphSource {
    /// Load a TrueType font, or fall back to the bitmap font when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(GlyphSource::Builtin);
        };

        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read font file: {}", path.display()))?;
        match Font::try_from_vec(data) {
            Some(font) => Ok(GlyphSource::TrueType(font)),
            None => anyhow::bail!("Not a usable TrueType font: {}", path.display()),
        }
    }

    /// Rasterize `text` relative to its top-left corner.
    ///
    /// Returns `(x, y, coverage)` triples; coverage is in `0.0..=1.0`.
    pub fn rasterize(&self, text: &str) -> Vec<(i32, i32, f32)> {
        match self {
            GlyphSource::Builtin => rasterize_builtin(text),
            GlyphSource::TrueType(font) => rasterize_truetype(font, text),
        }
    }
}

fn builtin_rows(c: char) -> Option<&'static [u8; 7]> {
    match c {
        '?' => Some(&QUESTION),
        '!' => Some(&EXCLAMATION),
        _ => None,
    }
}

fn rasterize_builtin(text: &str) -> Vec<(i32, i32, f32)> {
    let mut pixels = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let Some(rows) = builtin_rows(c) else {
            continue;
        };
        let origin = i as i32 * GLYPH_ADVANCE;
        for (y, row) in rows.iter().enumerate() {
            for x in 0..GLYPH_WIDTH {
                if row & (1 << (GLYPH_WIDTH - 1 - x)) != 0 {
                    pixels.push((origin + x, y as i32, 1.0));
                }
            }
        }
    }

    pixels
}

fn rasterize_truetype(font: &Font<'static>, text: &str) -> Vec<(i32, i32, f32)> {
    let scale = Scale::uniform(FONT_PX);
    let v_metrics = font.v_metrics(scale);
    let mut pixels = Vec::new();

    for glyph in font.layout(text, scale, point(0.0, v_metrics.ascent)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                pixels.push((bb.min.x + gx as i32, bb.min.y + gy as i32, v));
            });
        }
    }

    pixels
}

/// DejaVu Sans, shipped for exercising the TrueType path in tests
#[cfg(test)]
pub(crate) const DEJAVU_SANS: &[u8] = include_bytes!("fonts/DejaVuSans.ttf");
