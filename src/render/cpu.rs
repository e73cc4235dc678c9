use std::collections::HashMap;
use std::sync::Arc;

use kurbo::Shape as _;

use crate::command::codec::DrawCommand;
use crate::command::paint::{Paint, Rgba};
use crate::foundation::error::{DisplayError, DisplayResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::backend::{DisplayFrame, DisplayRenderer, check_canvas};
use crate::render::fonts::{FontBook, TextLayoutEngine};

const SHAPE_TOLERANCE: f64 = 0.1;
const GRADIENT_CACHE_CAP: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    paint: Paint,
    w: u16,
    h: u16,
}

/// Replays `Graphics:` queues onto an opaque black canvas with `vello_cpu`.
pub struct GraphicsRenderer {
    fonts: FontBook,
    text_engine: TextLayoutEngine,
    font_data: HashMap<String, vello_cpu::peniko::FontData>,
    ctx: Option<vello_cpu::RenderContext>,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
}

impl std::fmt::Debug for GraphicsRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsRenderer")
            .field("fonts", &self.fonts)
            .field("gradient_cache", &self.gradient_cache.len())
            .finish_non_exhaustive()
    }
}

impl GraphicsRenderer {
    /// Renderer drawing `text` commands with `fonts`.
    pub fn new(fonts: FontBook) -> Self {
        Self {
            fonts,
            text_engine: TextLayoutEngine::new(),
            font_data: HashMap::new(),
            ctx: None,
            gradient_cache: HashMap::new(),
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> DisplayResult<R>,
    ) -> DisplayResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        cmd: &DrawCommand,
        w: u16,
        h: u16,
    ) -> DisplayResult<()> {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.apply_paint(ctx, cmd.paint(), w, h)?;

        match cmd {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                fill,
                ..
            } => {
                fill_or_outline(ctx, &box_rect(*x, *y, *width, *height), *fill);
            }
            DrawCommand::RoundRect {
                x,
                y,
                width,
                height,
                arc_width,
                arc_height,
                fill,
                ..
            } => {
                let radius = f64::from((*arc_width).min(*arc_height)) / 2.0;
                let shape = kurbo::RoundedRect::from_rect(box_rect(*x, *y, *width, *height), radius);
                fill_or_outline(ctx, &shape, *fill);
            }
            DrawCommand::Oval {
                x,
                y,
                width,
                height,
                fill,
                ..
            } => {
                let shape = kurbo::Ellipse::from_rect(box_rect(*x, *y, *width, *height));
                fill_or_outline(ctx, &shape, *fill);
            }
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                ..
            } => {
                // Pixel centers, so odd widths land on whole pixels.
                let line = kurbo::Line::new(
                    (f64::from(*x1) + 0.5, f64::from(*y1) + 0.5),
                    (f64::from(*x2) + 0.5, f64::from(*y2) + 0.5),
                );
                stroke_path(ctx, &line.to_path(SHAPE_TOLERANCE), f64::from(*width));
            }
            DrawCommand::Text {
                x,
                y,
                font,
                font_size,
                text,
                ..
            } => {
                self.draw_text(ctx, *x, *y, font, *font_size, text)?;
            }
        }
        Ok(())
    }

    fn apply_paint(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        paint: &Paint,
        w: u16,
        h: u16,
    ) -> DisplayResult<()> {
        match *paint {
            Paint::Solid(c) => {
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
            }
            Paint::LinearGradient { .. } => {
                let image = self.gradient_paint(*paint, w, h)?;
                ctx.set_paint(image);
            }
        }
        Ok(())
    }

    /// Canvas-sized image of `paint`, sampled at pixel centers.
    fn gradient_paint(&mut self, paint: Paint, w: u16, h: u16) -> DisplayResult<vello_cpu::Image> {
        let key = GradientKey { paint, w, h };
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }
        let (width, height) = (u32::from(w), u32::from(h));
        let mut bytes = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for y in 0..height {
            for x in 0..width {
                let c = gradient_color_at(&paint, f64::from(x) + 0.5, f64::from(y) + 0.5);
                bytes.extend_from_slice(&c.to_array());
            }
        }
        premultiply_rgba8_in_place(&mut bytes);
        let img = rgba_premul_to_image(&bytes, w, h)?;
        if self.gradient_cache.len() >= GRADIENT_CACHE_CAP {
            self.gradient_cache.clear();
        }
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }

    fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        x: i32,
        y: i32,
        font: &str,
        font_size: i32,
        text: &str,
    ) -> DisplayResult<()> {
        let Some((name, bytes)) = self.fonts.resolve(font) else {
            return Err(DisplayError::validation(format!(
                "no font available for \"{font}\""
            )));
        };
        let name = name.to_owned();
        let bytes = Arc::clone(bytes);

        let layout = self
            .text_engine
            .layout_line(&name, &bytes, font_size as f32, text)?;
        let font_data = self
            .font_data
            .entry(name)
            .or_insert_with(|| {
                vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                    0,
                )
            })
            .clone();

        // (x, y) is the first line's baseline.
        let baseline = layout
            .lines()
            .next()
            .map(|line| line.metrics().baseline)
            .unwrap_or(0.0);
        let (dx, dy) = (x as f32, y as f32 - baseline);

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x + dx,
                    y: g.y + dy,
                });
                ctx.glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }
}

impl DisplayRenderer for GraphicsRenderer {
    #[tracing::instrument(skip(self, lines), fields(queued = lines.len()))]
    fn render(&mut self, dims: (u32, u32), lines: &[String]) -> DisplayResult<DisplayFrame> {
        let (width, height) = dims;
        let w: u16 = width
            .try_into()
            .map_err(|_| DisplayError::capacity(format!("graphics width {width} exceeds u16")))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| DisplayError::capacity(format!("graphics height {height} exceeds u16")))?;
        check_canvas(width, height)?;

        self.with_ctx_mut(w, h, |this, ctx| {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 255));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(w),
                f64::from(h),
            ));

            for (index, line) in lines.iter().enumerate() {
                let cmd = match DrawCommand::decode(line) {
                    Ok(cmd) => cmd,
                    Err(e) => {
                        tracing::warn!(index, error = %e, "skipping undecodable display command");
                        continue;
                    }
                };
                if let Err(e) = this.draw(ctx, &cmd, w, h) {
                    tracing::warn!(index, tag = cmd.tag(), error = %e, "skipping display command");
                }
            }

            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.render_to_pixmap(&mut pixmap);
            // The canvas is opaque, so premultiplied bytes equal straight ones.
            Ok(DisplayFrame {
                width,
                height,
                data: pixmap.data_as_u8_slice().to_vec(),
            })
        })
    }
}

/// Color of a gradient paint at canvas point `(x, y)`. Solid paints are uniform.
pub(crate) fn gradient_color_at(paint: &Paint, x: f64, y: f64) -> Rgba {
    let (start, start_at, end, end_at, cyclic) = match *paint {
        Paint::Solid(c) => return c,
        Paint::LinearGradient {
            start,
            start_at,
            end,
            end_at,
            cyclic,
        } => (start, start_at, end, end_at, cyclic),
    };

    let (x1, y1) = (f64::from(start_at.0), f64::from(start_at.1));
    let (dx, dy) = (f64::from(end_at.0) - x1, f64::from(end_at.1) - y1);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        ((x - x1) * dx + (y - y1) * dy) / len2
    };
    let t = if cyclic {
        let m = t.rem_euclid(2.0);
        if m > 1.0 { 2.0 - m } else { m }
    } else {
        t.clamp(0.0, 1.0)
    };

    let lerp = |a: u8, b: u8| -> u8 {
        let (af, bf) = (f64::from(a), f64::from(b));
        (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
    };
    Rgba::new(
        lerp(start.r, end.r),
        lerp(start.g, end.g),
        lerp(start.b, end.b),
        lerp(start.a, end.a),
    )
}

/// `(x, y, width, height)` box in canvas pixels.
fn box_rect(x: i32, y: i32, width: i32, height: i32) -> kurbo::Rect {
    kurbo::Rect::new(
        f64::from(x),
        f64::from(y),
        f64::from(x) + f64::from(width),
        f64::from(y) + f64::from(height),
    )
}

/// Fill `shape`, or trace its outline 1px wide along pixel centers.
fn fill_or_outline(ctx: &mut vello_cpu::RenderContext, shape: &impl kurbo::Shape, fill: bool) {
    let mut path = shape.to_path(SHAPE_TOLERANCE);
    if fill {
        ctx.fill_path(&bezpath_to_cpu(&path));
    } else {
        path.apply_affine(kurbo::Affine::translate((0.5, 0.5)));
        stroke_path(ctx, &path, 1.0);
    }
}

fn stroke_path(ctx: &mut vello_cpu::RenderContext, path: &kurbo::BezPath, width: f64) {
    let outline = kurbo::stroke(
        path.iter(),
        &kurbo::Stroke::new(width),
        &kurbo::StrokeOpts::default(),
        SHAPE_TOLERANCE,
    );
    ctx.fill_path(&bezpath_to_cpu(&outline));
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        px[0] = mul_div255_u8(u16::from(px[0]), a);
        px[1] = mul_div255_u8(u16::from(px[1]), a);
        px[2] = mul_div255_u8(u16::from(px[2]), a);
    }
}

fn rgba_premul_to_image(bytes_premul: &[u8], w: u16, h: u16) -> DisplayResult<vello_cpu::Image> {
    if bytes_premul.len() != (w as usize) * (h as usize) * 4 {
        return Err(DisplayError::validation("gradient pixmap byte length mismatch"));
    }
    let pixels = bytes_premul
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
