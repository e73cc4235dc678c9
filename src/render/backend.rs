use crate::command::mode::parse_dimensions;
use crate::foundation::config::DisplayConfig;
use crate::foundation::error::{DisplayError, DisplayResult};
use crate::render::cpu::GraphicsRenderer;
use crate::render::fonts::FontBook;
use crate::render::text_grid::{GlyphAtlas, TextGridRenderer};

/// Largest canvas, in pixels, any renderer will allocate.
pub const MAX_CANVAS_PIXELS: u64 = 1 << 24;

/// Reject canvases that are empty or larger than [`MAX_CANVAS_PIXELS`].
pub(crate) fn check_canvas(width: u32, height: u32) -> DisplayResult<()> {
    if width == 0 || height == 0 {
        return Err(DisplayError::validation(format!(
            "canvas must be non-empty, got {width}x{height}"
        )));
    }
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_CANVAS_PIXELS {
        return Err(DisplayError::capacity(format!(
            "canvas {width}x{height} exceeds {MAX_CANVAS_PIXELS} pixels"
        )));
    }
    Ok(())
}

/// Rasterized display contents as straight-alpha RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl DisplayFrame {
    /// Frame filled with one color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let n = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(n * 4);
        for _ in 0..n {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// The 1x1 black frame shown for unformatted or unrenderable displays.
    pub fn blank() -> Self {
        Self::solid(1, 1, [0, 0, 0, 255])
    }

    /// Pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Turns a mode's dimensions plus its command queue into pixels.
pub trait DisplayRenderer {
    /// Render `lines` for a mode whose dimension pair is `dims`.
    fn render(&mut self, dims: (u32, u32), lines: &[String]) -> DisplayResult<DisplayFrame>;
}

/// Renders every mode as [`DisplayFrame::blank`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BlankRenderer;

impl DisplayRenderer for BlankRenderer {
    fn render(&mut self, _dims: (u32, u32), _lines: &[String]) -> DisplayResult<DisplayFrame> {
        Ok(DisplayFrame::blank())
    }
}

/// Mode prefix to renderer table. Selection is by longest matching prefix.
#[derive(Default)]
pub struct RendererRegistry {
    entries: Vec<(String, Box<dyn DisplayRenderer>)>,
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(p, _)| p))
            .finish()
    }
}

impl RendererRegistry {
    /// Registry with no renderers; every mode rasterizes blank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the graphics and text-grid renderers installed.
    pub fn with_defaults(config: &DisplayConfig, fonts: FontBook, atlas: Option<GlyphAtlas>) -> Self {
        let mut reg = Self::new();
        reg.register(
            crate::command::mode::GRAPHICS_PREFIX,
            GraphicsRenderer::new(fonts),
        );
        reg.register(
            crate::command::mode::TEXT_PREFIX,
            TextGridRenderer::new(atlas, (config.glyph_cell_width, config.glyph_cell_height)),
        );
        reg
    }

    /// Install `renderer` for modes starting with `prefix`, replacing an existing entry.
    pub fn register(&mut self, prefix: impl Into<String>, renderer: impl DisplayRenderer + 'static) {
        let prefix = prefix.into();
        let renderer: Box<dyn DisplayRenderer> = Box::new(renderer);
        match self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            Some(slot) => slot.1 = renderer,
            None => self.entries.push((prefix, renderer)),
        }
    }

    /// Registered prefixes in insertion order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    /// Rasterize a committed mode+queue snapshot. Never fails: anything unrenderable is blank.
    #[tracing::instrument(skip(self, lines), fields(queued = lines.len()))]
    pub fn rasterize(&mut self, mode: Option<&str>, lines: &[String]) -> DisplayFrame {
        let Some(mode) = mode else {
            return DisplayFrame::blank();
        };
        let Some((prefix_len, renderer)) = self
            .entries
            .iter_mut()
            .filter(|(p, _)| mode.starts_with(p.as_str()))
            .max_by_key(|(p, _)| p.len())
            .map(|(p, r)| (p.len(), r))
        else {
            tracing::warn!(mode, "no renderer registered for display mode");
            return DisplayFrame::blank();
        };
        let dims = match parse_dimensions(&mode[prefix_len..]) {
            Ok(dims) => dims,
            Err(e) => {
                tracing::warn!(mode, error = %e, "malformed display mode");
                return DisplayFrame::blank();
            }
        };
        match renderer.render(dims, lines) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!(mode, error = %e, "display renderer failed");
                DisplayFrame::blank()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
