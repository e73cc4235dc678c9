use std::collections::HashMap;
use std::sync::Arc;

use crate::foundation::math::Fnv1a64;
use crate::render::backend::{DisplayFrame, RendererRegistry};
use crate::surface::record::DisplaySurface;
use crate::surface::world::SurfaceId;

/// Counters for [`DisplayPresenter`] cache behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresenterStats {
    /// Frames served from the cache.
    pub hits: u64,
    /// Frames rasterized.
    pub misses: u64,
}

/// Presentation side: rasterizes committed surfaces, only when their contents changed.
#[derive(Debug)]
pub struct DisplayPresenter {
    registry: RendererRegistry,
    cache: HashMap<SurfaceId, (u64, Arc<DisplayFrame>)>,
    stats: PresenterStats,
}

impl DisplayPresenter {
    /// Presenter with an empty cache, rasterizing through `registry`.
    pub fn new(registry: RendererRegistry) -> Self {
        Self {
            registry,
            cache: HashMap::new(),
            stats: PresenterStats::default(),
        }
    }

    /// Current frame for `surface`, reusing the cached one if mode and queue are unchanged.
    pub fn present(&mut self, id: SurfaceId, surface: &DisplaySurface) -> Arc<DisplayFrame> {
        let key = fingerprint(surface);
        if let Some((k, frame)) = self.cache.get(&id)
            && *k == key
        {
            self.stats.hits += 1;
            tracing::debug!(surface = ?id, "display frame cache hit");
            return Arc::clone(frame);
        }

        self.stats.misses += 1;
        tracing::debug!(surface = ?id, mode = ?surface.mode, "rasterizing display");
        let frame = Arc::new(
            self.registry
                .rasterize(surface.mode.as_deref(), &surface.data),
        );
        self.cache.insert(id, (key, Arc::clone(&frame)));
        frame
    }

    /// Forget the cached frame of a surface that went away.
    pub fn evict(&mut self, id: SurfaceId) -> bool {
        self.cache.remove(&id).is_some()
    }

    /// Cache counters since construction.
    pub fn stats(&self) -> PresenterStats {
        self.stats
    }

    /// Registry used for cache misses, e.g. to register more renderers.
    pub fn registry_mut(&mut self) -> &mut RendererRegistry {
        &mut self.registry
    }
}

fn fingerprint(surface: &DisplaySurface) -> u64 {
    let mut h = Fnv1a64::new_default();
    match &surface.mode {
        Some(mode) => {
            h.write_u8(1);
            h.write_str(mode);
        }
        None => h.write_u8(0),
    }
    h.write_u64(surface.data.len() as u64);
    for line in &surface.data {
        h.write_str(line);
    }
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/render/presenter.rs"]
mod tests;
