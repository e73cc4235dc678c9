use std::collections::HashMap;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{DisplayError, DisplayResult};
use crate::foundation::math::blend_over_opaque;
use crate::render::backend::{DisplayFrame, DisplayRenderer, check_canvas};

/// Placement of one glyph inside the atlas and inside its grid cell.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlyphMetrics {
    /// Left edge in the atlas, normalized to `[0, 1]`.
    pub u: f32,
    /// Top edge in the atlas, normalized to `[0, 1]`.
    pub v: f32,
    /// Normalized width in the atlas.
    pub u_width: f32,
    /// Normalized height in the atlas.
    pub v_height: f32,
    /// Drawn width in pixels.
    pub width: u32,
    /// Drawn height in pixels.
    pub height: u32,
    /// Offset from the cell's left edge.
    #[serde(default)]
    pub x_offset: i32,
    /// Offset from the cell's top edge.
    #[serde(default)]
    pub y_offset: i32,
    /// Horizontal advance; must fit in one cell.
    pub advance: u32,
}

/// Bitmap font: an RGBA atlas image plus per-character metrics.
#[derive(Clone, Debug)]
pub struct GlyphAtlas {
    image: image::RgbaImage,
    glyphs: HashMap<char, GlyphMetrics>,
}

impl GlyphAtlas {
    /// Build an atlas, checking every glyph against the grid cell width.
    pub fn from_parts(
        image: image::RgbaImage,
        glyphs: HashMap<char, GlyphMetrics>,
        cell_width: u32,
    ) -> DisplayResult<Self> {
        for (ch, m) in &glyphs {
            if m.advance > cell_width {
                return Err(DisplayError::validation(format!(
                    "glyph {ch:?} advance {} exceeds cell width {cell_width}",
                    m.advance
                )));
            }
            let in_unit = |a: f32, len: f32| a >= 0.0 && len >= 0.0 && a + len <= 1.0;
            if !in_unit(m.u, m.u_width) || !in_unit(m.v, m.v_height) {
                return Err(DisplayError::validation(format!(
                    "glyph {ch:?} lies outside the atlas"
                )));
            }
        }
        Ok(Self { image, glyphs })
    }

    /// Load a PNG atlas and its JSON metrics map (`{"A": {...}, ...}`).
    pub fn load(image_path: &Path, metrics_path: &Path, cell_width: u32) -> DisplayResult<Self> {
        let image = image::open(image_path)
            .with_context(|| format!("open glyph atlas '{}'", image_path.display()))?
            .to_rgba8();
        let f = std::fs::File::open(metrics_path)
            .with_context(|| format!("open glyph metrics '{}'", metrics_path.display()))?;
        let glyphs: HashMap<char, GlyphMetrics> =
            serde_json::from_reader(std::io::BufReader::new(f))
                .with_context(|| format!("parse glyph metrics '{}'", metrics_path.display()))?;
        Self::from_parts(image, glyphs, cell_width)
    }

    /// Metrics for `ch`, if the atlas has it.
    pub fn glyph(&self, ch: char) -> Option<&GlyphMetrics> {
        self.glyphs.get(&ch)
    }

    /// Nearest atlas texel for output pixel `(dx, dy)` of glyph `m`.
    fn sample(&self, m: &GlyphMetrics, dx: u32, dy: u32) -> [u8; 4] {
        let (aw, ah) = self.image.dimensions();
        if aw == 0 || ah == 0 || m.width == 0 || m.height == 0 {
            return [0, 0, 0, 0];
        }
        let fx = (m.u + m.u_width * (dx as f32 + 0.5) / m.width as f32) * aw as f32;
        let fy = (m.v + m.v_height * (dy as f32 + 0.5) / m.height as f32) * ah as f32;
        let sx = (fx.floor().max(0.0) as u32).min(aw - 1);
        let sy = (fy.floor().max(0.0) as u32).min(ah - 1);
        self.image.get_pixel(sx, sy).0
    }
}

/// Rasterizes `Text:` queues, one line per row, from a [`GlyphAtlas`].
///
/// Without an atlas the grid renders as a black canvas of the right size.
#[derive(Clone, Debug)]
pub struct TextGridRenderer {
    atlas: Option<GlyphAtlas>,
    cell: (u32, u32),
}

impl TextGridRenderer {
    /// Renderer with `cell` = `(width, height)` pixels per character.
    pub fn new(atlas: Option<GlyphAtlas>, cell: (u32, u32)) -> Self {
        Self { atlas, cell }
    }

    fn blit(
        atlas: &GlyphAtlas,
        frame: &mut DisplayFrame,
        m: &GlyphMetrics,
        origin: (i64, i64),
    ) {
        let (fw, fh) = (i64::from(frame.width), i64::from(frame.height));
        for dy in 0..m.height {
            let py = origin.1 + i64::from(m.y_offset) + i64::from(dy);
            if py < 0 || py >= fh {
                continue;
            }
            for dx in 0..m.width {
                let px = origin.0 + i64::from(m.x_offset) + i64::from(dx);
                if px < 0 || px >= fw {
                    continue;
                }
                let src = atlas.sample(m, dx, dy);
                if src[3] == 0 {
                    continue;
                }
                let idx = ((py * fw + px) * 4) as usize;
                blend_over_opaque(&mut frame.data[idx..idx + 4], src);
            }
        }
    }
}

impl DisplayRenderer for TextGridRenderer {
    #[tracing::instrument(skip(self, lines), fields(queued = lines.len()))]
    fn render(&mut self, dims: (u32, u32), lines: &[String]) -> DisplayResult<DisplayFrame> {
        let (columns, rows) = dims;
        let (cw, ch) = self.cell;
        let width = columns
            .checked_mul(cw)
            .ok_or_else(|| DisplayError::capacity("text grid width overflows"))?;
        let height = rows
            .checked_mul(ch)
            .ok_or_else(|| DisplayError::capacity("text grid height overflows"))?;
        check_canvas(width, height)?;
        let mut frame = DisplayFrame::solid(width, height, [0, 0, 0, 255]);

        let Some(atlas) = &self.atlas else {
            tracing::debug!("no glyph atlas loaded; text grid left blank");
            return Ok(frame);
        };

        for (row, line) in lines.iter().take(rows as usize).enumerate() {
            for (col, c) in line.chars().take(columns as usize).enumerate() {
                let Some(m) = atlas.glyph(c) else {
                    continue;
                };
                let origin = (col as i64 * i64::from(cw), row as i64 * i64::from(ch));
                Self::blit(atlas, &mut frame, m, origin);
            }
        }
        Ok(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text_grid.rs"]
mod tests;
