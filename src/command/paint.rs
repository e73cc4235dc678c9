use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{DisplayError, DisplayResult};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Construct a color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Parse `RRGGBB` (alpha 255) or `RRGGBBAA`, case-insensitive, no prefix.
pub fn parse_hex_color(s: &str) -> DisplayResult<Rgba> {
    if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(DisplayError::encoding(format!(
            "invalid hex digit '{bad}' in color \"{s}\""
        )));
    }

    fn hex_byte(pair: &str) -> DisplayResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| DisplayError::encoding(format!("invalid hex byte \"{pair}\"")))
    }

    match s.len() {
        6 => Ok(Rgba::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        )),
        8 => Ok(Rgba::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        n => Err(DisplayError::encoding(format!(
            "hex color must be RRGGBB or RRGGBBAA, got {n} digits"
        ))),
    }
}

/// Fill style referenced by draw commands.
///
/// Encodes to a single colon-free token:
/// `color(r,g,b,a)` or `gradient(r1,g1,b1,a1,x1,y1,r2,g2,b2,a2,x2,y2,cyclic)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Uniform color.
    Solid(Rgba),
    /// Two-point linear gradient in canvas pixel coordinates.
    LinearGradient {
        /// Color at `start_at`.
        start: Rgba,
        /// Anchor of the start color.
        start_at: (i32, i32),
        /// Color at `end_at`.
        end: Rgba,
        /// Anchor of the end color.
        end_at: (i32, i32),
        /// Repeat back and forth beyond the anchors instead of clamping.
        cyclic: bool,
    },
}

impl Paint {
    /// One-line encoding of this paint.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Parse a paint token.
    pub fn decode(token: &str) -> DisplayResult<Self> {
        token.parse()
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Solid(c) => write!(f, "color({},{},{},{})", c.r, c.g, c.b, c.a),
            Paint::LinearGradient {
                start,
                start_at,
                end,
                end_at,
                cyclic,
            } => write!(
                f,
                "gradient({},{},{},{},{},{},{},{},{},{},{},{},{})",
                start.r,
                start.g,
                start.b,
                start.a,
                start_at.0,
                start_at.1,
                end.r,
                end.g,
                end.b,
                end.a,
                end_at.0,
                end_at.1,
                cyclic
            ),
        }
    }
}

impl FromStr for Paint {
    type Err = DisplayError;

    fn from_str(token: &str) -> DisplayResult<Self> {
        let (name, args) = token
            .strip_suffix(')')
            .and_then(|t| t.split_once('('))
            .ok_or_else(|| DisplayError::encoding(format!("malformed paint \"{token}\"")))?;
        let args: Vec<&str> = args.split(',').collect();

        match (name, args.as_slice()) {
            ("color", [r, g, b, a]) => Ok(Paint::Solid(Rgba::new(
                channel(r)?,
                channel(g)?,
                channel(b)?,
                channel(a)?,
            ))),
            ("gradient", [r1, g1, b1, a1, x1, y1, r2, g2, b2, a2, x2, y2, cyclic]) => {
                Ok(Paint::LinearGradient {
                    start: Rgba::new(channel(r1)?, channel(g1)?, channel(b1)?, channel(a1)?),
                    start_at: (coord(x1)?, coord(y1)?),
                    end: Rgba::new(channel(r2)?, channel(g2)?, channel(b2)?, channel(a2)?),
                    end_at: (coord(x2)?, coord(y2)?),
                    cyclic: flag(cyclic)?,
                })
            }
            ("color" | "gradient", _) => Err(DisplayError::encoding(format!(
                "paint \"{name}\" has wrong argument count {}",
                args.len()
            ))),
            _ => Err(DisplayError::encoding(format!("unknown paint \"{name}\""))),
        }
    }
}

pub(crate) fn channel(s: &str) -> DisplayResult<u8> {
    canonical(s, "color channel")
}

pub(crate) fn coord(s: &str) -> DisplayResult<i32> {
    canonical(s, "integer")
}

/// Integer fields only accept the form they encode back to: no sign prefix,
/// no leading zeros, no `-0`.
fn canonical<T>(s: &str, what: &str) -> DisplayResult<T>
where
    T: FromStr + ToString,
{
    match s.parse::<T>() {
        Ok(v) if v.to_string() == s => Ok(v),
        _ => Err(DisplayError::encoding(format!("invalid {what} \"{s}\""))),
    }
}

pub(crate) fn flag(s: &str) -> DisplayResult<bool> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(DisplayError::encoding(format!("invalid boolean \"{s}\""))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/paint.rs"]
mod tests;
