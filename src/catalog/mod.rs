//! Level catalog and level generation.
//!
//! Levels are static configuration consumed by the engine when a session
//! starts. The catalog validates everything it holds, so the engine can
//! assume well-formed input.

mod generator;
mod registry;

pub use generator::LevelGenerator;
pub use registry::{CatalogError, LevelCatalog};
