use std::collections::{BTreeMap, HashMap};

use crate::foundation::config::DisplayConfig;
use crate::foundation::core::{BlockPos, Direction, Region};
use crate::foundation::error::{DisplayError, DisplayResult};
use crate::surface::record::{CandidateBlock, DisplayRecipe, DisplaySurface, HolderRecord};

/// Stable handle of a formed display within its host.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SurfaceId(pub u32);

/// What bindings need from the world: lookup by location and replace-on-write persistence.
pub trait DisplayHost {
    /// Tunables in effect for displays in this host.
    fn config(&self) -> &DisplayConfig;

    /// Display whose region contains `pos`, if any.
    fn surface_at(&self, pos: BlockPos) -> Option<SurfaceId>;

    /// Current committed state of a display.
    fn surface(&self, id: SurfaceId) -> Option<&DisplaySurface>;

    /// Atomically replace a display's state.
    fn commit(&mut self, id: SurfaceId, state: DisplaySurface) -> DisplayResult<()>;
}

#[derive(Clone, Debug)]
struct Aggregate {
    region: Region,
    state: DisplaySurface,
}

/// In-memory block map and display registry.
///
/// Stands in for the host's entity store: candidate blocks are placed explicitly and regions are
/// handed to [`DisplayWorld::form`] by the caller's adjacency search.
#[derive(Debug)]
pub struct DisplayWorld {
    config: DisplayConfig,
    recipe: DisplayRecipe,
    blocks: HashMap<BlockPos, CandidateBlock>,
    holders: HashMap<BlockPos, HolderRecord>,
    aggregates: BTreeMap<SurfaceId, Aggregate>,
    next_id: u32,
}

impl Default for DisplayWorld {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

impl DisplayWorld {
    /// Empty world using `config`.
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            recipe: DisplayRecipe::new(&config),
            config,
            blocks: HashMap::new(),
            holders: HashMap::new(),
            aggregates: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Recipe used to validate regions.
    pub fn recipe(&self) -> &DisplayRecipe {
        &self.recipe
    }

    /// Place a display candidate block.
    pub fn place_candidate(&mut self, pos: BlockPos, facing: Option<Direction>) {
        self.place_block(
            pos,
            CandidateBlock {
                marker: DisplayRecipe::CANDIDATE_MARKER.to_owned(),
                facing,
            },
        );
    }

    /// Place an arbitrary block, replacing whatever was there.
    pub fn place_block(&mut self, pos: BlockPos, block: CandidateBlock) {
        self.blocks.insert(pos, block);
    }

    /// Remove a block. A display covering it disbands permanently.
    pub fn remove_block(&mut self, pos: BlockPos) -> Option<CandidateBlock> {
        if let Some(id) = self.surface_at(pos) {
            self.disband(id);
        }
        self.holders.remove(&pos);
        self.blocks.remove(&pos)
    }

    /// Recognize `region` as a display.
    ///
    /// State parked on the main block by a previous [`DisplayWorld::unload`] is restored and the
    /// holder removed; otherwise the display starts with no mode and an empty queue.
    pub fn form(&mut self, region: Region) -> DisplayResult<SurfaceId> {
        let size = region.size();
        if !self.recipe.accepts_region(size) {
            return Err(DisplayError::validation(format!(
                "region {}x{}x{} is not a flat display of at most {} blocks per side",
                size.x,
                size.y,
                size.z,
                self.recipe.max_dimension()
            )));
        }
        if self.aggregates.values().any(|a| a.region.intersects(&region)) {
            return Err(DisplayError::validation(
                "region overlaps an existing display",
            ));
        }

        let main = self
            .blocks
            .get(&region.min)
            .filter(|b| self.recipe.is_candidate(b))
            .ok_or_else(|| DisplayError::validation("main block is not a display candidate"))?;
        for pos in region.positions() {
            let block = self.blocks.get(&pos).ok_or_else(|| {
                DisplayError::validation(format!("missing display block at {pos:?}"))
            })?;
            if !self.recipe.is_candidate(block) || !self.recipe.can_join(main, block) {
                return Err(DisplayError::validation(format!(
                    "block at {pos:?} cannot join the display"
                )));
            }
        }

        let holder = self.holders.remove(&region.min);
        let restored = holder.is_some();
        let state = self.recipe.on_loaded(holder, &region, main);

        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        tracing::debug!(?id, ?region, restored, "display formed");
        self.aggregates.insert(id, Aggregate { region, state });
        Ok(id)
    }

    /// Unload a display, parking its state on the main block until the region forms again.
    pub fn unload(&mut self, id: SurfaceId) -> DisplayResult<HolderRecord> {
        let agg = self
            .aggregates
            .remove(&id)
            .ok_or_else(|| DisplayError::resolution(format!("no display {id:?}")))?;
        let holder = self.recipe.on_unloaded(agg.state);
        self.holders.insert(agg.region.min, holder.clone());
        Ok(holder)
    }

    /// Destroy a display and its state.
    pub fn disband(&mut self, id: SurfaceId) -> Option<DisplaySurface> {
        let agg = self.aggregates.remove(&id)?;
        tracing::debug!(?id, region = ?agg.region, "display disbanded");
        Some(agg.state)
    }

    /// Region covered by a display.
    pub fn region(&self, id: SurfaceId) -> Option<Region> {
        self.aggregates.get(&id).map(|a| a.region)
    }

    /// Parked state on a main block, if any.
    pub fn holder_at(&self, pos: BlockPos) -> Option<&HolderRecord> {
        self.holders.get(&pos)
    }

    /// Ids of all formed displays, ascending.
    pub fn surface_ids(&self) -> impl Iterator<Item = SurfaceId> + '_ {
        self.aggregates.keys().copied()
    }
}

impl DisplayHost for DisplayWorld {
    fn config(&self) -> &DisplayConfig {
        &self.config
    }

    fn surface_at(&self, pos: BlockPos) -> Option<SurfaceId> {
        self.aggregates
            .iter()
            .find(|(_, a)| a.region.contains(pos))
            .map(|(id, _)| *id)
    }

    fn surface(&self, id: SurfaceId) -> Option<&DisplaySurface> {
        self.aggregates.get(&id).map(|a| &a.state)
    }

    fn commit(&mut self, id: SurfaceId, state: DisplaySurface) -> DisplayResult<()> {
        let agg = self
            .aggregates
            .get_mut(&id)
            .ok_or_else(|| DisplayError::resolution(format!("no display {id:?}")))?;
        agg.state = state;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/world.rs"]
mod tests;
