use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{DisplayError, DisplayResult};

/// Environment variable overriding [`DisplayConfig::max_dimension`].
pub const MAX_DIMENSION_ENV: &str = "DISPLAYWALL_MAX_DIMENSION";

/// Tunables shared by aggregation, binding and rasterization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Largest extent in blocks a display region may have along any axis.
    pub max_dimension: u32,
    /// Maximum horizontal graphics pixels per block.
    pub pixels_per_block_x: u32,
    /// Maximum vertical graphics pixels per block.
    pub pixels_per_block_y: u32,
    /// Text columns per block of width.
    pub columns_per_block: u32,
    /// Text rows per block of height.
    pub rows_per_block: u32,
    /// Width in pixels of one text-grid cell.
    pub glyph_cell_width: u32,
    /// Height in pixels of one text-grid cell.
    pub glyph_cell_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_dimension: 5,
            pixels_per_block_x: 128,
            pixels_per_block_y: 128,
            columns_per_block: 10,
            rows_per_block: 5,
            glyph_cell_width: 8,
            glyph_cell_height: 16,
        }
    }
}

impl DisplayConfig {
    /// Defaults, with `DISPLAYWALL_MAX_DIMENSION` applied when set to a positive integer.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides on top of `self`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(n) = std::env::var(MAX_DIMENSION_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
        {
            self.max_dimension = n;
        }
        self
    }

    /// Read a JSON config file; missing fields take their defaults.
    pub fn from_path(path: &Path) -> DisplayResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open display config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(std::io::BufReader::new(f))
            .with_context(|| format!("parse display config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Every field must be positive.
    pub fn validate(&self) -> DisplayResult<()> {
        let fields = [
            ("max_dimension", self.max_dimension),
            ("pixels_per_block_x", self.pixels_per_block_x),
            ("pixels_per_block_y", self.pixels_per_block_y),
            ("columns_per_block", self.columns_per_block),
            ("rows_per_block", self.rows_per_block),
            ("glyph_cell_width", self.glyph_cell_width),
            ("glyph_cell_height", self.glyph_cell_height),
        ];
        for (name, v) in fields {
            if v == 0 {
                return Err(DisplayError::validation(format!(
                    "display config {name} must be > 0"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
