use crate::binding::buffer::OffScreenBuffer;
use crate::binding::resolve::{RenderBinding, resolve};
use crate::card::{CallContext, DrawTarget, non_negative, positive, with_sink};
use crate::command::codec::DrawCommand;
use crate::command::mode::SurfaceKind;
use crate::command::paint::{Paint, parse_hex_color};
use crate::foundation::core::Direction;
use crate::foundation::error::{DisplayError, DisplayResult};
use crate::surface::world::DisplayHost;

/// Graphics card: pixel bindings, paints and draw calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphicsCard;

impl GraphicsCard {
    /// Binding at an exact resolution. Not checked against any display until used.
    pub fn get_render_binding(
        &self,
        ctx: CallContext,
        direction: &str,
        width: i32,
        height: i32,
    ) -> DisplayResult<RenderBinding> {
        let run = || -> DisplayResult<RenderBinding> {
            let direction: Direction = direction.parse()?;
            RenderBinding::graphics(
                direction,
                positive("width", width)?,
                positive("height", height)?,
            )
        };
        run().map_err(|e| e.at(ctx.line))
    }

    /// Binding at the full resolution of the display in `direction`.
    pub fn get_max_render_binding(
        &self,
        host: &dyn DisplayHost,
        ctx: CallContext,
        direction: &str,
    ) -> DisplayResult<RenderBinding> {
        let run = || -> DisplayResult<RenderBinding> {
            let direction: Direction = direction.parse()?;
            resolve(host, ctx.origin, direction)?;
            Ok(RenderBinding::maximum(direction))
        };
        run().map_err(|e| e.at(ctx.line))
    }

    /// Largest `(width, height)` the display in `direction` can show.
    pub fn get_maximum_resolution(
        &self,
        host: &dyn DisplayHost,
        ctx: CallContext,
        direction: &str,
    ) -> DisplayResult<(u32, u32)> {
        let run = || -> DisplayResult<(u32, u32)> {
            let direction: Direction = direction.parse()?;
            let mode = RenderBinding::maximum(direction).required_mode(host, ctx.origin)?;
            Ok(mode.resolution())
        };
        run().map_err(|e| e.at(ctx.line))
    }

    /// Resolution a binding draws at.
    pub fn get_render_size(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        target: DrawTarget<'_>,
    ) -> DisplayResult<(u32, u32)> {
        with_sink(host, ctx, target, SurfaceKind::Graphics, "getRenderSize", |sink| {
            Ok(sink.resolution())
        })
    }

    /// Drop every queued command.
    pub fn clear(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        target: DrawTarget<'_>,
    ) -> DisplayResult<()> {
        with_sink(host, ctx, target, SurfaceKind::Graphics, "clear", |sink| {
            sink.replace(Vec::new())
        })
    }

    /// New empty graphics buffer of `width`×`height` pixels.
    pub fn create_off_screen_buffer(
        &self,
        ctx: CallContext,
        width: i32,
        height: i32,
    ) -> DisplayResult<OffScreenBuffer> {
        let run = || -> DisplayResult<OffScreenBuffer> {
            OffScreenBuffer::graphics(positive("width", width)?, positive("height", height)?)
        };
        run().map_err(|e| e.at(ctx.line))
    }

    /// Flip `buffer` onto `target`, replacing its queue.
    pub fn render_buffer(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        buffer: &OffScreenBuffer,
        target: DrawTarget<'_>,
    ) -> DisplayResult<()> {
        if buffer.mode().kind != SurfaceKind::Graphics {
            return Err(
                DisplayError::validation("invalid offScreenBuffer in renderBuffer()").at(ctx.line),
            );
        }
        with_sink(host, ctx, target, SurfaceKind::Graphics, "renderBuffer", |sink| {
            buffer.transfer(sink)
        })
    }

    /// Solid paint from `RRGGBB` or `RRGGBBAA`.
    pub fn create_color(&self, ctx: CallContext, hex: &str) -> DisplayResult<Paint> {
        parse_hex_color(hex)
            .map(Paint::Solid)
            .map_err(|e| e.at(ctx.line))
    }

    /// Linear gradient between two anchored colors.
    #[allow(clippy::too_many_arguments)]
    pub fn create_gradient(
        &self,
        ctx: CallContext,
        hex1: &str,
        x1: i32,
        y1: i32,
        hex2: &str,
        x2: i32,
        y2: i32,
        cyclic: bool,
    ) -> DisplayResult<Paint> {
        let run = || -> DisplayResult<Paint> {
            Ok(Paint::LinearGradient {
                start: parse_hex_color(hex1)?,
                start_at: (x1, y1),
                end: parse_hex_color(hex2)?,
                end_at: (x2, y2),
                cyclic,
            })
        };
        run().map_err(|e| e.at(ctx.line))
    }

    /// Validate and append one command.
    pub fn draw(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        target: DrawTarget<'_>,
        cmd: DrawCommand,
    ) -> DisplayResult<()> {
        let method = method_name(&cmd);
        validate(&cmd).map_err(|e| e.at(ctx.line))?;
        with_sink(host, ctx, target, SurfaceKind::Graphics, method, |sink| {
            sink.append(&cmd)
        })
    }

    /// Queue text with its baseline starting at `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        target: DrawTarget<'_>,
        x: i32,
        y: i32,
        text: &str,
        paint: Paint,
        font: &str,
        font_size: i32,
    ) -> DisplayResult<()> {
        let cmd = DrawCommand::Text {
            x,
            y,
            paint,
            font: font.to_owned(),
            font_size,
            text: text.to_owned(),
        };
        self.draw(host, ctx, target, cmd)
    }

    /// Queue an axis-aligned rectangle.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rect(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        target: DrawTarget<'_>,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        paint: Paint,
        fill: bool,
    ) -> DisplayResult<()> {
        let cmd = DrawCommand::Rect {
            x,
            y,
            width,
            height,
            paint,
            fill,
        };
        self.draw(host, ctx, target, cmd)
    }

    /// Queue a rectangle with corners rounded by `arc_width`×`arc_height`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_round_rect(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        target: DrawTarget<'_>,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
        paint: Paint,
        fill: bool,
    ) -> DisplayResult<()> {
        let cmd = DrawCommand::RoundRect {
            x,
            y,
            width,
            height,
            arc_width,
            arc_height,
            paint,
            fill,
        };
        self.draw(host, ctx, target, cmd)
    }

    /// Queue an ellipse inscribed in the given box.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_oval(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        target: DrawTarget<'_>,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        paint: Paint,
        fill: bool,
    ) -> DisplayResult<()> {
        let cmd = DrawCommand::Oval {
            x,
            y,
            width,
            height,
            paint,
            fill,
        };
        self.draw(host, ctx, target, cmd)
    }

    /// Queue a straight line `width` pixels thick.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_line(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        target: DrawTarget<'_>,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        paint: Paint,
        width: i32,
    ) -> DisplayResult<()> {
        let cmd = DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            paint,
            width,
        };
        self.draw(host, ctx, target, cmd)
    }
}

fn method_name(cmd: &DrawCommand) -> &'static str {
    match cmd {
        DrawCommand::Text { .. } => "drawText",
        DrawCommand::Rect { .. } => "drawRectangle",
        DrawCommand::RoundRect { .. } => "drawRoundedRectangle",
        DrawCommand::Oval { .. } => "drawOval",
        DrawCommand::Line { .. } => "drawLine",
    }
}

/// Reject commands that would not survive the line encoding or make no geometric sense.
fn validate(cmd: &DrawCommand) -> DisplayResult<()> {
    match cmd {
        DrawCommand::Text {
            font, font_size, ..
        } => {
            if font.contains([':', '\n', '\r']) {
                return Err(DisplayError::validation(format!(
                    "font name \"{font}\" must not contain ':' or line breaks"
                )));
            }
            positive("fontSize", *font_size).map(|_| ())
        }
        DrawCommand::Rect { width, height, .. } | DrawCommand::Oval { width, height, .. } => {
            non_negative("width", *width)?;
            non_negative("height", *height)
        }
        DrawCommand::RoundRect {
            width,
            height,
            arc_width,
            arc_height,
            ..
        } => {
            non_negative("width", *width)?;
            non_negative("height", *height)?;
            non_negative("arcWidth", *arc_width)?;
            non_negative("arcHeight", *arc_height)
        }
        DrawCommand::Line { width, .. } => positive("width", *width).map(|_| ()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/graphics.rs"]
mod tests;
