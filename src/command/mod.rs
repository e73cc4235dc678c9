//! Line-oriented encoding of draw commands, paints and display modes.

/// Draw command codec.
pub mod codec;
/// Display mode strings.
pub mod mode;
/// Colors and paint tokens.
pub mod paint;
