//! Script-facing operations of the graphics and text display cards.
//!
//! Each operation validates its parameters, resolves its binding against the host and reports
//! every fault tagged with the calling script line.

use crate::binding::buffer::OffScreenBuffer;
use crate::binding::resolve::RenderBinding;
use crate::binding::sink::CommandSink;
use crate::command::mode::SurfaceKind;
use crate::foundation::core::BlockPos;
use crate::foundation::error::{DisplayError, DisplayResult};
use crate::surface::world::DisplayHost;

/// Execution cost figures.
pub mod cost;
/// Graphics card.
pub mod graphics;
/// Text card.
pub mod text;

/// Where a script call comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallContext {
    /// Block the calling computer occupies.
    pub origin: BlockPos,
    /// Script line of the call, used to tag faults.
    pub line: u32,
}

impl CallContext {
    /// Context for a call from `origin` at script `line`.
    pub fn new(origin: BlockPos, line: u32) -> Self {
        Self { origin, line }
    }
}

/// A render binding argument: either a live display or an off-screen buffer.
#[derive(Debug)]
pub enum DrawTarget<'a> {
    /// Resolve against the world on use.
    Live(&'a RenderBinding),
    /// Draw into a detached buffer.
    Buffer(&'a mut OffScreenBuffer),
}

impl DrawTarget<'_> {
    /// Off-screen targets complete without presentation delay.
    pub fn is_instant(&self) -> bool {
        matches!(self, DrawTarget::Buffer(_))
    }

    fn kind(&self) -> SurfaceKind {
        match self {
            DrawTarget::Live(b) => b.surface_kind(),
            DrawTarget::Buffer(b) => b.mode().kind,
        }
    }
}

/// Run `f` against the sink `target` resolves to, checking it is of `kind`.
pub(crate) fn with_sink<R>(
    host: &mut dyn DisplayHost,
    ctx: CallContext,
    target: DrawTarget<'_>,
    kind: SurfaceKind,
    method: &str,
    f: impl FnOnce(&mut dyn CommandSink) -> DisplayResult<R>,
) -> DisplayResult<R> {
    let run = || -> DisplayResult<R> {
        if target.kind() != kind {
            return Err(DisplayError::validation(format!(
                "invalid renderBinding in {method}()"
            )));
        }
        match target {
            DrawTarget::Live(binding) => {
                let mut sink = binding.bind(host, ctx.origin)?;
                f(&mut sink)
            }
            DrawTarget::Buffer(buffer) => f(buffer),
        }
    };
    run().map_err(|e| e.at(ctx.line))
}

pub(crate) fn positive(name: &str, v: i32) -> DisplayResult<u32> {
    u32::try_from(v)
        .ok()
        .filter(|&v| v > 0)
        .ok_or_else(|| DisplayError::validation(format!("{name} must be positive, got {v}")))
}

pub(crate) fn non_negative(name: &str, v: i32) -> DisplayResult<()> {
    if v < 0 {
        return Err(DisplayError::validation(format!(
            "{name} must not be negative, got {v}"
        )));
    }
    Ok(())
}
