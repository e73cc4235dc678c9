use std::fmt;
use std::str::FromStr;

use crate::command::paint::{Paint, coord, flag};
use crate::foundation::error::{DisplayError, DisplayResult};

/// One deferred draw operation on a graphics display.
///
/// Each command encodes to exactly one line: a tag, then its fields joined with `:` in
/// declaration order. `Text` carries its user string last so it may contain colons.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DrawCommand {
    /// `text:x:y:paint:font:fontSize:text`
    Text {
        /// Left edge of the baseline.
        x: i32,
        /// Baseline y.
        y: i32,
        /// Fill paint.
        paint: Paint,
        /// Font name; must not contain `:`.
        font: String,
        /// Font size in pixels.
        font_size: i32,
        /// Text to draw, may contain any character.
        text: String,
    },
    /// `drawRect:x:y:w:h:paint:fill`
    Rect {
        /// Left.
        x: i32,
        /// Top.
        y: i32,
        /// Width.
        width: i32,
        /// Height.
        height: i32,
        /// Fill or stroke paint.
        paint: Paint,
        /// Fill the interior instead of stroking the outline.
        fill: bool,
    },
    /// `drawRoundRect:x:y:w:h:arcWidth:arcHeight:paint:fill`
    RoundRect {
        /// Left.
        x: i32,
        /// Top.
        y: i32,
        /// Width.
        width: i32,
        /// Height.
        height: i32,
        /// Horizontal corner arc diameter.
        arc_width: i32,
        /// Vertical corner arc diameter.
        arc_height: i32,
        /// Fill or stroke paint.
        paint: Paint,
        /// Fill the interior instead of stroking the outline.
        fill: bool,
    },
    /// `drawOval:x:y:w:h:paint:fill`
    Oval {
        /// Left of the bounding box.
        x: i32,
        /// Top of the bounding box.
        y: i32,
        /// Bounding box width.
        width: i32,
        /// Bounding box height.
        height: i32,
        /// Fill or stroke paint.
        paint: Paint,
        /// Fill the interior instead of stroking the outline.
        fill: bool,
    },
    /// `drawLine:x1:y1:x2:y2:paint:width`
    Line {
        /// Start x.
        x1: i32,
        /// Start y.
        y1: i32,
        /// End x.
        x2: i32,
        /// End y.
        y2: i32,
        /// Stroke paint.
        paint: Paint,
        /// Stroke width in pixels.
        width: i32,
    },
}

const TAG_TEXT: &str = "text";
const TAG_RECT: &str = "drawRect";
const TAG_ROUND_RECT: &str = "drawRoundRect";
const TAG_OVAL: &str = "drawOval";
const TAG_LINE: &str = "drawLine";

/// Fields of `text` before the free-form payload.
const TEXT_FIXED_FIELDS: usize = 5;

impl DrawCommand {
    /// Encode to one queue line.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decode one queue line.
    pub fn decode(line: &str) -> DisplayResult<Self> {
        line.parse()
    }

    /// Tag that starts this command's line.
    pub fn tag(&self) -> &'static str {
        match self {
            DrawCommand::Text { .. } => TAG_TEXT,
            DrawCommand::Rect { .. } => TAG_RECT,
            DrawCommand::RoundRect { .. } => TAG_ROUND_RECT,
            DrawCommand::Oval { .. } => TAG_OVAL,
            DrawCommand::Line { .. } => TAG_LINE,
        }
    }

    /// Paint this command draws with.
    pub fn paint(&self) -> &Paint {
        match self {
            DrawCommand::Text { paint, .. }
            | DrawCommand::Rect { paint, .. }
            | DrawCommand::RoundRect { paint, .. }
            | DrawCommand::Oval { paint, .. }
            | DrawCommand::Line { paint, .. } => paint,
        }
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag();
        match self {
            DrawCommand::Text {
                x,
                y,
                paint,
                font,
                font_size,
                text,
            } => write!(f, "{tag}:{x}:{y}:{paint}:{font}:{font_size}:{text}"),
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                paint,
                fill,
            }
            | DrawCommand::Oval {
                x,
                y,
                width,
                height,
                paint,
                fill,
            } => write!(f, "{tag}:{x}:{y}:{width}:{height}:{paint}:{fill}"),
            DrawCommand::RoundRect {
                x,
                y,
                width,
                height,
                arc_width,
                arc_height,
                paint,
                fill,
            } => write!(
                f,
                "{tag}:{x}:{y}:{width}:{height}:{arc_width}:{arc_height}:{paint}:{fill}"
            ),
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                paint,
                width,
            } => write!(f, "{tag}:{x1}:{y1}:{x2}:{y2}:{paint}:{width}"),
        }
    }
}

impl FromStr for DrawCommand {
    type Err = DisplayError;

    fn from_str(line: &str) -> DisplayResult<Self> {
        let (tag, rest) = line
            .split_once(':')
            .ok_or_else(|| DisplayError::encoding(format!("missing command tag in \"{line}\"")))?;

        match tag {
            TAG_TEXT => {
                let f: Vec<&str> = rest.splitn(TEXT_FIXED_FIELDS + 1, ':').collect();
                let [x, y, paint, font, size, text] = fields::<6>(tag, &f)?;
                Ok(DrawCommand::Text {
                    x: coord(x)?,
                    y: coord(y)?,
                    paint: paint.parse()?,
                    font: font.to_owned(),
                    font_size: coord(size)?,
                    text: text.to_owned(),
                })
            }
            TAG_RECT | TAG_OVAL => {
                let f: Vec<&str> = rest.split(':').collect();
                let [x, y, w, h, paint, fill] = fields::<6>(tag, &f)?;
                let (x, y, width, height) = (coord(x)?, coord(y)?, coord(w)?, coord(h)?);
                let (paint, fill) = (paint.parse()?, flag(fill)?);
                Ok(if tag == TAG_RECT {
                    DrawCommand::Rect {
                        x,
                        y,
                        width,
                        height,
                        paint,
                        fill,
                    }
                } else {
                    DrawCommand::Oval {
                        x,
                        y,
                        width,
                        height,
                        paint,
                        fill,
                    }
                })
            }
            TAG_ROUND_RECT => {
                let f: Vec<&str> = rest.split(':').collect();
                let [x, y, w, h, aw, ah, paint, fill] = fields::<8>(tag, &f)?;
                Ok(DrawCommand::RoundRect {
                    x: coord(x)?,
                    y: coord(y)?,
                    width: coord(w)?,
                    height: coord(h)?,
                    arc_width: coord(aw)?,
                    arc_height: coord(ah)?,
                    paint: paint.parse()?,
                    fill: flag(fill)?,
                })
            }
            TAG_LINE => {
                let f: Vec<&str> = rest.split(':').collect();
                let [x1, y1, x2, y2, paint, width] = fields::<6>(tag, &f)?;
                Ok(DrawCommand::Line {
                    x1: coord(x1)?,
                    y1: coord(y1)?,
                    x2: coord(x2)?,
                    y2: coord(y2)?,
                    paint: paint.parse()?,
                    width: coord(width)?,
                })
            }
            other => Err(DisplayError::encoding(format!(
                "unknown command tag \"{other}\""
            ))),
        }
    }
}

fn fields<'a, const N: usize>(tag: &str, f: &[&'a str]) -> DisplayResult<[&'a str; N]> {
    <[&'a str; N]>::try_from(f).map_err(|_| {
        DisplayError::encoding(format!(
            "\"{tag}\" expects {N} fields, got {}",
            f.len()
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/command/codec.rs"]
mod tests;
