use std::fmt;
use std::str::FromStr;

use crate::command::codec::DrawCommand;
use crate::foundation::error::{DisplayError, DisplayResult};

/// Renderer prefix for pixel-addressed graphics queues.
pub const GRAPHICS_PREFIX: &str = "Graphics:";
/// Renderer prefix for character-grid queues.
pub const TEXT_PREFIX: &str = "Text:";

/// Which grammar a queue is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// Lines are encoded [`crate::DrawCommand`]s.
    Graphics,
    /// Lines are plain rows of characters.
    Text,
}

impl SurfaceKind {
    /// Mode prefix selecting the renderer for this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            SurfaceKind::Graphics => GRAPHICS_PREFIX,
            SurfaceKind::Text => TEXT_PREFIX,
        }
    }
}

/// Renderer selector plus resolution, persisted as `<prefix><dim1>,<dim2>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisplayMode {
    /// Queue grammar.
    pub kind: SurfaceKind,
    /// Pixels (graphics) or columns (text).
    pub width: u32,
    /// Pixels (graphics) or rows (text).
    pub height: u32,
}

impl DisplayMode {
    /// Graphics mode at `width`×`height` pixels.
    pub fn graphics(width: u32, height: u32) -> Self {
        Self {
            kind: SurfaceKind::Graphics,
            width,
            height,
        }
    }

    /// Text mode with `columns`×`rows` characters.
    pub fn text(columns: u32, rows: u32) -> Self {
        Self {
            kind: SurfaceKind::Text,
            width: columns,
            height: rows,
        }
    }

    /// `(width, height)` in the mode's own unit.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check that `lines` is a queue this mode can hold.
    ///
    /// Graphics lines must decode as draw commands. Text queues may hold at most `height` rows
    /// of at most `width` characters each.
    pub fn check_lines(&self, lines: &[String]) -> DisplayResult<()> {
        match self.kind {
            SurfaceKind::Graphics => {
                for (i, line) in lines.iter().enumerate() {
                    DrawCommand::decode(line).map_err(|e| {
                        DisplayError::encoding(format!("queued line {}: {e}", i + 1))
                    })?;
                }
            }
            SurfaceKind::Text => {
                if lines.len() as u64 > u64::from(self.height) {
                    return Err(DisplayError::capacity(format!(
                        "{} rows do not fit in a {}-row grid",
                        lines.len(),
                        self.height
                    )));
                }
                if let Some((i, row)) = lines
                    .iter()
                    .enumerate()
                    .find(|(_, row)| row.chars().count() as u64 > u64::from(self.width))
                {
                    return Err(DisplayError::capacity(format!(
                        "row {} has {} characters, grid is {} wide",
                        i + 1,
                        row.chars().count(),
                        self.width
                    )));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{},{}", self.kind.prefix(), self.width, self.height)
    }
}

impl FromStr for DisplayMode {
    type Err = DisplayError;

    fn from_str(s: &str) -> DisplayResult<Self> {
        if let Some(dims) = s.strip_prefix(GRAPHICS_PREFIX) {
            let (w, h) = parse_dimensions(dims)?;
            Ok(Self::graphics(w, h))
        } else if let Some(dims) = s.strip_prefix(TEXT_PREFIX) {
            let (c, r) = parse_dimensions(dims)?;
            Ok(Self::text(c, r))
        } else {
            Err(DisplayError::encoding(format!("unknown display mode \"{s}\"")))
        }
    }
}

/// Parse the `<dim1>,<dim2>` tail of a mode string. Both must be plain decimal integers.
pub fn parse_dimensions(s: &str) -> DisplayResult<(u32, u32)> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| DisplayError::encoding(format!("mode dimensions \"{s}\" lack a comma")))?;
    let dim = |v: &str| {
        if v.is_empty() || !v.bytes().all(|c| c.is_ascii_digit()) {
            return Err(DisplayError::encoding(format!("invalid mode dimension \"{v}\"")));
        }
        v.parse::<u32>()
            .map_err(|_| DisplayError::encoding(format!("mode dimension \"{v}\" out of range")))
    };
    Ok((dim(a)?, dim(b)?))
}

#[cfg(test)]
#[path = "../../tests/unit/command/mode.rs"]
mod tests;
