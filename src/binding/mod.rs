//! Render bindings, command sinks and off-screen buffers.

/// Off-screen draw queues.
pub mod buffer;
/// Binding resolution and mode negotiation.
pub mod resolve;
/// Command sink and source capabilities.
pub mod sink;
