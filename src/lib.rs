//! Displaywall: deferred render commands for multi-block displays.
//!
//! Scripts never draw pixels directly. They resolve a render binding next to their computer,
//! append encoded draw commands to the display's persisted queue, and the presentation side
//! replays the queue into a frame whenever it changes.
//!
//! - [`DisplayWorld`] forms planar regions of display blocks into a [`DisplaySurface`]
//! - [`GraphicsCard`] and [`TextCard`] are the script-facing operations
//! - [`RendererRegistry`] and [`DisplayPresenter`] turn surfaces into [`DisplayFrame`]s
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Render bindings, command sinks and off-screen buffers.
pub mod binding;
/// Graphics and text card operations.
pub mod card;
/// Draw command, paint and mode encodings.
pub mod command;
/// Rasterization and presentation.
pub mod render;
/// Display aggregation and the host world.
pub mod surface;

pub use crate::foundation::config::{DisplayConfig, MAX_DIMENSION_ENV};
pub use crate::foundation::core::{BlockPos, Direction, Region, Size3};
pub use crate::foundation::error::{DisplayError, DisplayResult, FaultKind};

pub use crate::binding::buffer::OffScreenBuffer;
pub use crate::binding::resolve::{BindingKind, RenderBinding, Resolution};
pub use crate::binding::sink::{CommandSink, CommandSource, LiveSink};
pub use crate::card::cost::{GraphicsOp, MethodCost, TextOp};
pub use crate::card::graphics::GraphicsCard;
pub use crate::card::text::TextCard;
pub use crate::card::{CallContext, DrawTarget};
pub use crate::command::codec::DrawCommand;
pub use crate::command::mode::{DisplayMode, SurfaceKind};
pub use crate::command::paint::{Paint, Rgba};
pub use crate::render::backend::{
    BlankRenderer, DisplayFrame, DisplayRenderer, MAX_CANVAS_PIXELS, RendererRegistry,
};
pub use crate::render::cpu::GraphicsRenderer;
pub use crate::render::fonts::{FontBook, TextLayoutEngine};
pub use crate::render::presenter::{DisplayPresenter, PresenterStats};
pub use crate::render::text_grid::{GlyphAtlas, GlyphMetrics, TextGridRenderer};
pub use crate::surface::record::{CandidateBlock, DisplayRecipe, DisplaySurface, HolderRecord};
pub use crate::surface::world::{DisplayHost, DisplayWorld, SurfaceId};
