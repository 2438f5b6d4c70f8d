//! Neighbor-bitmask autotiling for a cultivable farm grid
//!
//! Cells carry a terrain type, an irrigation flag and an optional growing crop.
//! Each redraw derives sprites from the eight surrounding cells: grass borders
//! bend around the soil, farmland shapes join into contiguous plots and water
//! overlays follow the irrigated region. A session owns the grid, applies tools
//! and growth ticks, and persists the state as JSON.

#![forbid(unsafe_code)]

/// Tool transitions, growth, pattern resolution and draw list composition
pub mod algorithm;
/// Configuration, persistence, rendering, CLI and error handling
pub mod io;
/// Tile records, the tile grid and neighbour bitmasks
pub mod spatial;

pub use io::error::{FarmError, Result};
