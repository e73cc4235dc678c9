use crate::binding::buffer::OffScreenBuffer;
use crate::binding::resolve::RenderBinding;
use crate::card::{CallContext, DrawTarget, positive, with_sink};
use crate::command::mode::SurfaceKind;
use crate::foundation::core::Direction;
use crate::foundation::error::{DisplayError, DisplayResult};
use crate::surface::world::DisplayHost;

/// Text card: a fixed character grid per display.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextCard;

impl TextCard {
    /// Text binding for the display in `direction`.
    pub fn get_render_binding(
        &self,
        ctx: CallContext,
        direction: &str,
    ) -> DisplayResult<RenderBinding> {
        direction
            .parse::<Direction>()
            .map(RenderBinding::text)
            .map_err(|e| e.at(ctx.line))
    }

    /// `(columns, rows)` of the bound grid.
    pub fn get_render_size(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        target: DrawTarget<'_>,
    ) -> DisplayResult<(u32, u32)> {
        with_sink(host, ctx, target, SurfaceKind::Text, "getRenderSize", |sink| {
            Ok(sink.resolution())
        })
    }

    /// Blank every row.
    pub fn clear(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        target: DrawTarget<'_>,
    ) -> DisplayResult<()> {
        with_sink(host, ctx, target, SurfaceKind::Text, "clear", |sink| {
            let (_, rows) = sink.resolution();
            sink.replace(vec![String::new(); rows as usize])
        })
    }

    /// Overwrite `text` into row `y` starting at column `x`.
    ///
    /// The row is padded with spaces up to `x`; characters past the written segment are kept.
    pub fn set_characters(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        target: DrawTarget<'_>,
        x: i32,
        y: i32,
        text: &str,
    ) -> DisplayResult<()> {
        with_sink(host, ctx, target, SurfaceKind::Text, "setCharacters", |sink| {
            let (columns, rows) = sink.resolution();
            let x = usize::try_from(x)
                .map_err(|_| DisplayError::validation(format!("x must not be negative, got {x}")))?;
            let y = usize::try_from(y)
                .map_err(|_| DisplayError::validation(format!("y must not be negative, got {y}")))?;
            if text.contains(['\n', '\r']) {
                return Err(DisplayError::validation("text must not contain line breaks"));
            }
            let len = text.chars().count();
            if x + len > columns as usize {
                return Err(DisplayError::validation(
                    "text will not fit in the display horizontally",
                ));
            }
            if y >= rows as usize {
                return Err(DisplayError::validation(format!(
                    "line index out of bounds {y}>={rows}"
                )));
            }

            let old = sink.existing()?;
            let lines = (0..rows as usize)
                .map(|i| {
                    let line = old.get(i).map(String::as_str).unwrap_or("");
                    if i == y {
                        overwrite(line, x, text)
                    } else {
                        line.to_owned()
                    }
                })
                .collect();
            sink.replace(lines)
        })
    }

    /// New empty text buffer of `columns`×`rows` characters.
    pub fn create_off_screen_buffer(
        &self,
        ctx: CallContext,
        columns: i32,
        rows: i32,
    ) -> DisplayResult<OffScreenBuffer> {
        let run = || -> DisplayResult<OffScreenBuffer> {
            OffScreenBuffer::text(positive("width", columns)?, positive("height", rows)?)
        };
        run().map_err(|e| e.at(ctx.line))
    }

    /// Flip `buffer` onto `target`, replacing every row.
    pub fn render_buffer(
        &self,
        host: &mut dyn DisplayHost,
        ctx: CallContext,
        buffer: &OffScreenBuffer,
        target: DrawTarget<'_>,
    ) -> DisplayResult<()> {
        if buffer.mode().kind != SurfaceKind::Text {
            return Err(
                DisplayError::validation("invalid offScreenBuffer in renderBuffer()").at(ctx.line),
            );
        }
        with_sink(host, ctx, target, SurfaceKind::Text, "renderBuffer", |sink| {
            buffer.transfer(sink)
        })
    }
}

fn overwrite(line: &str, x: usize, text: &str) -> String {
    let mut out: String = line.chars().take(x).collect();
    let have = out.chars().count();
    out.extend(std::iter::repeat_n(' ', x - have));
    out.push_str(text);
    out.extend(line.chars().skip(x + text.chars().count()));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/card/text.rs"]
mod tests;
