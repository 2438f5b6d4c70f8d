//! Spatial data structures for the farm grid
//!
//! This module contains spatial-related functionality including:
//! - Tile records and the terrain/crop vocabulary
//! - The bounds-checked tile grid
//! - Eight-neighbour bitmask computation

/// Fixed-size tile grid with void-sentinel reads
pub mod grid;
/// Neighbour directions and bitmask computation
pub mod neighbors;
/// Tile records, terrain and crop identifiers
pub mod tile;

pub use grid::TileGrid;
pub use tile::{CropId, Terrain, Tile};
