//! Multi-block display aggregation and persisted display state.

/// Display state records and the aggregation recipe.
pub mod record;
/// In-memory host world and the host trait bindings resolve against.
pub mod world;
