//! Eight-neighbor bitmasks
//!
//! Bit layout, most significant first: `TL, T, TR, L, R, BL, B, BR`. The centre
//! cell is omitted and the two middle-row neighbours sit together ahead of the
//! bottom row, so this is not a plain row-major scan of the 3x3 window.

use crate::spatial::grid::TileGrid;
use crate::spatial::tile::Tile;

/// One of the eight compass neighbours of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top-left
    TopLeft,
    /// Top
    Top,
    /// Top-right
    TopRight,
    /// Left
    Left,
    /// Right
    Right,
    /// Bottom-left
    BottomLeft,
    /// Bottom
    Bottom,
    /// Bottom-right
    BottomRight,
}

impl Direction {
    /// All directions in bit order, most significant bit first
    pub const ALL: [Self; 8] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    /// Grid offset `(dx, dy)` of the neighbour
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::TopLeft => (-1, -1),
            Self::Top => (0, -1),
            Self::TopRight => (1, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::BottomLeft => (-1, 1),
            Self::Bottom => (0, 1),
            Self::BottomRight => (1, 1),
        }
    }

    /// Single-bit mask for this direction
    pub const fn bit(self) -> u8 {
        match self {
            Self::TopLeft => 0b1000_0000,
            Self::Top => 0b0100_0000,
            Self::TopRight => 0b0010_0000,
            Self::Left => 0b0001_0000,
            Self::Right => 0b0000_1000,
            Self::BottomLeft => 0b0000_0100,
            Self::Bottom => 0b0000_0010,
            Self::BottomRight => 0b0000_0001,
        }
    }

    /// Short label (`TL`, `T`, ...)
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "TL",
            Self::Top => "T",
            Self::TopRight => "TR",
            Self::Left => "L",
            Self::Right => "R",
            Self::BottomLeft => "BL",
            Self::Bottom => "B",
            Self::BottomRight => "BR",
        }
    }
}

/// Fold a direction list into a mask
///
/// Usable in constant tables so that pattern masks are computed at compile time.
pub const fn mask_of(directions: &[Direction]) -> u8 {
    match directions {
        [first, rest @ ..] => first.bit() | mask_of(rest),
        [] => 0,
    }
}

/// Compute which neighbours of `(x, y)` satisfy `predicate`
///
/// Out-of-bounds neighbours are tested as the void sentinel, including
/// neighbours whose coordinates would overflow `i32`.
pub fn neighbor_mask<P>(grid: &TileGrid, x: i32, y: i32, predicate: P) -> u8
where
    P: Fn(&Tile) -> bool,
{
    Direction::ALL.iter().fold(0, |mask, &direction| {
        let (dx, dy) = direction.offset();
        let neighbor = x
            .checked_add(dx)
            .zip(y.checked_add(dy))
            .map_or_else(Tile::void, |(nx, ny)| grid.get(nx, ny));
        if predicate(&neighbor) {
            mask | direction.bit()
        } else {
            mask
        }
    })
}

/// Neighbours that are dirt or farmland (grass border shaping)
pub fn soil_mask(grid: &TileGrid, x: i32, y: i32) -> u8 {
    neighbor_mask(grid, x, y, Tile::is_soil)
}

/// Neighbours that are farmland (farmland shape)
pub fn farmland_mask(grid: &TileGrid, x: i32, y: i32) -> u8 {
    neighbor_mask(grid, x, y, Tile::is_farmland)
}

/// Neighbours that are watered (water overlay shape)
pub fn watered_mask(grid: &TileGrid, x: i32, y: i32) -> u8 {
    neighbor_mask(grid, x, y, |tile| tile.watered)
}

/// Render a mask as its direction labels, e.g. `T_R_B`
pub fn describe_mask(mask: u8) -> String {
    Direction::ALL
        .iter()
        .filter(|direction| mask & direction.bit() != 0)
        .map(|direction| direction.label())
        .collect::<Vec<_>>()
        .join("_")
}
