//! Presentation side: turns committed mode+queue snapshots into pixels.
//!
//! [`backend::RendererRegistry`] picks a renderer by mode prefix. Graphics queues replay on
//! `vello_cpu`; text grids blit from a bitmap glyph atlas.

/// Frames, the renderer trait and the prefix registry.
pub mod backend;
/// `vello_cpu` graphics renderer.
pub mod cpu;
/// Named fonts and text shaping.
pub mod fonts;
/// Per-surface frame cache.
pub mod presenter;
/// Bitmap text-grid renderer.
pub mod text_grid;
