use crate::command::mode::DisplayMode;
use crate::foundation::config::DisplayConfig;
use crate::foundation::core::{Direction, Region, Size3};

/// Persisted state of a formed display.
///
/// Invariants: exactly one size axis is 1, every axis is within the configured maximum, and the
/// queue is emptied whenever the mode changes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DisplaySurface {
    /// Extent in blocks.
    pub size: Size3,
    /// Side the display faces, if the founding block is orientable.
    pub front: Option<Direction>,
    /// Current renderer mode string, absent before first use.
    pub mode: Option<String>,
    /// Ordered command queue under `mode`'s grammar.
    #[serde(default)]
    pub data: Vec<String>,
}

impl DisplaySurface {
    /// Fresh state for a just-formed region: no mode, empty queue.
    pub fn formed(size: Size3, front: Option<Direction>) -> Self {
        Self {
            size,
            front,
            mode: None,
            data: Vec::new(),
        }
    }

    /// Switch to `mode`, dropping the queue if the mode changes. Returns `true` on a reset.
    pub fn ensure_mode(&mut self, mode: &DisplayMode) -> bool {
        let required = mode.to_string();
        if self.mode.as_deref() == Some(required.as_str()) {
            return false;
        }
        self.mode = Some(required);
        self.data.clear();
        true
    }

    /// Largest graphics resolution the display can show.
    pub fn max_resolution(&self, config: &DisplayConfig) -> (u32, u32) {
        (
            self.size.width_span() * config.pixels_per_block_x,
            self.size.height_span() * config.pixels_per_block_y,
        )
    }

    /// Character grid of the display in text mode.
    pub fn text_grid(&self, config: &DisplayConfig) -> (u32, u32) {
        (
            self.size.width_span() * config.columns_per_block,
            self.size.height_span() * config.rows_per_block,
        )
    }
}

/// Copy of a [`DisplaySurface`] parked on the main block while the display is unloaded.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HolderRecord {
    /// Extent in blocks.
    pub size: Size3,
    /// Facing side.
    pub front: Option<Direction>,
    /// Mode string.
    pub mode: Option<String>,
    /// Command queue.
    #[serde(default)]
    pub data: Vec<String>,
}

impl From<DisplaySurface> for HolderRecord {
    fn from(s: DisplaySurface) -> Self {
        Self {
            size: s.size,
            front: s.front,
            mode: s.mode,
            data: s.data,
        }
    }
}

impl From<HolderRecord> for DisplaySurface {
    fn from(h: HolderRecord) -> Self {
        Self {
            size: h.size,
            front: h.front,
            mode: h.mode,
            data: h.data,
        }
    }
}

/// A block as the display recipe sees it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CandidateBlock {
    /// Multiblock candidate marker carried by the block.
    pub marker: String,
    /// Facing side, absent for non-orientable block families.
    pub facing: Option<Direction>,
}

/// Display-specific predicates and state transfer hooks for the multiblock registry.
#[derive(Clone, Debug)]
pub struct DisplayRecipe {
    marker: String,
    max_dimension: u32,
}

impl DisplayRecipe {
    /// Marker a block must carry to be part of a display.
    pub const CANDIDATE_MARKER: &'static str = "displaywall:display";

    /// Recipe with the default marker and `config`'s size bound.
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            marker: Self::CANDIDATE_MARKER.to_owned(),
            max_dimension: config.max_dimension,
        }
    }

    /// Largest accepted extent along any axis.
    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }

    /// Whether `block` may take part in a display.
    pub fn is_candidate(&self, block: &CandidateBlock) -> bool {
        block.marker == self.marker
    }

    /// Two candidates merge only when they face the same way.
    pub fn can_join(&self, a: &CandidateBlock, b: &CandidateBlock) -> bool {
        a.facing == b.facing
    }

    /// One block deep, no axis longer than the configured maximum.
    pub fn accepts_region(&self, size: Size3) -> bool {
        size.min_axis() == 1 && size.max_axis() <= self.max_dimension
    }

    /// State for a newly recognized region founded by `main`.
    pub fn on_formed(&self, region: &Region, main: &CandidateBlock) -> DisplaySurface {
        if main.facing.is_none() {
            tracing::debug!(?region, "display formed without a known facing");
        }
        DisplaySurface::formed(region.size(), main.facing)
    }

    /// Park the display's state on its main block.
    pub fn on_unloaded(&self, surface: DisplaySurface) -> HolderRecord {
        HolderRecord::from(surface)
    }

    /// Restore parked state, or start fresh when none was parked.
    pub fn on_loaded(
        &self,
        holder: Option<HolderRecord>,
        region: &Region,
        main: &CandidateBlock,
    ) -> DisplaySurface {
        match holder {
            Some(h) => DisplaySurface::from(h),
            None => self.on_formed(region, main),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/record.rs"]
mod tests;
