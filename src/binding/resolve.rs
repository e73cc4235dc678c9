use crate::binding::sink::LiveSink;
use crate::command::mode::{DisplayMode, SurfaceKind};
use crate::foundation::core::{BlockPos, Direction};
use crate::foundation::error::{DisplayError, DisplayResult};
use crate::surface::world::{DisplayHost, SurfaceId};

/// Requested graphics resolution of a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Exactly this many pixels; must fit the display.
    Exact {
        /// Pixels across.
        width: u32,
        /// Pixels down.
        height: u32,
    },
    /// Whatever the display's full resolution is at bind time.
    Maximum,
}

/// What a binding draws as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// Pixel graphics at a resolution.
    Graphics(Resolution),
    /// Character grid sized by the display.
    Text,
}

/// "Where to draw": a direction from the caller plus what to draw as.
///
/// Holds no reference to a display; every use re-resolves the neighbouring block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderBinding {
    /// Direction from the caller's block to the display.
    pub direction: Direction,
    /// Requested mode.
    pub kind: BindingKind,
}

impl RenderBinding {
    /// Memory weight of a binding handle.
    pub const WEIGHT: u64 = 4;

    /// Graphics binding at an exact resolution.
    pub fn graphics(direction: Direction, width: u32, height: u32) -> DisplayResult<Self> {
        if width == 0 || height == 0 {
            return Err(DisplayError::validation(format!(
                "binding resolution must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            direction,
            kind: BindingKind::Graphics(Resolution::Exact { width, height }),
        })
    }

    /// Graphics binding at the display's maximum resolution.
    pub fn maximum(direction: Direction) -> Self {
        Self {
            direction,
            kind: BindingKind::Graphics(Resolution::Maximum),
        }
    }

    /// Text-grid binding.
    pub fn text(direction: Direction) -> Self {
        Self {
            direction,
            kind: BindingKind::Text,
        }
    }

    /// Queue grammar this binding writes.
    pub fn surface_kind(&self) -> SurfaceKind {
        match self.kind {
            BindingKind::Graphics(_) => SurfaceKind::Graphics,
            BindingKind::Text => SurfaceKind::Text,
        }
    }

    /// Mode this binding requires on the display it resolves to.
    pub fn required_mode(
        &self,
        host: &dyn DisplayHost,
        origin: BlockPos,
    ) -> DisplayResult<DisplayMode> {
        let id = resolve(host, origin, self.direction)?;
        self.mode_for(host, id)
    }

    fn mode_for(&self, host: &dyn DisplayHost, id: SurfaceId) -> DisplayResult<DisplayMode> {
        let state = host
            .surface(id)
            .ok_or_else(|| DisplayError::resolution("display has no state"))?;
        let config = host.config();
        let (max_w, max_h) = state.max_resolution(config);
        match self.kind {
            BindingKind::Graphics(Resolution::Maximum) => Ok(DisplayMode::graphics(max_w, max_h)),
            BindingKind::Graphics(Resolution::Exact { width, height }) => {
                if width > max_w || height > max_h {
                    return Err(DisplayError::capacity(format!(
                        "graphics mode {width}x{height} exceeds the maximum display resolution {max_w}x{max_h}"
                    )));
                }
                Ok(DisplayMode::graphics(width, height))
            }
            BindingKind::Text => {
                let (cols, rows) = state.text_grid(config);
                Ok(DisplayMode::text(cols, rows))
            }
        }
    }

    /// Resolve and bind to the display next to `origin`.
    #[tracing::instrument(skip(host))]
    pub fn bind<'h>(
        &self,
        host: &'h mut dyn DisplayHost,
        origin: BlockPos,
    ) -> DisplayResult<LiveSink<'h>> {
        let id = resolve(&*host, origin, self.direction)?;
        let mode = self.mode_for(&*host, id)?;
        Ok(LiveSink::new(host, id, mode))
    }
}

/// Display occupying the block one step from `origin` in `direction`.
pub fn resolve(
    host: &dyn DisplayHost,
    origin: BlockPos,
    direction: Direction,
) -> DisplayResult<SurfaceId> {
    let at = origin.offset(direction);
    host.surface_at(at).ok_or_else(|| {
        DisplayError::resolution(format!(
            "unable to locate a display {direction} of {origin:?}"
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/binding/resolve.rs"]
mod tests;
