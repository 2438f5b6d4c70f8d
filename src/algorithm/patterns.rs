//! Priority-ordered subset matching of neighbour masks to sprites
//!
//! A pattern names the neighbour directions that must qualify for its sprite to
//! apply. A mask matches a pattern when it contains every required bit; extra
//! bits do not disqualify. Because most masks contain several patterns, tables
//! are ordered from most required directions to fewest and the first match
//! wins. A fully surrounded cell contains every pattern, so checking broad
//! patterns first would hand it an edge sprite.

use crate::spatial::neighbors::{Direction, mask_of};

/// Sprite position in a sheet's tile-grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteCoord {
    /// Column in the sheet
    pub x: u32,
    /// Row in the sheet
    pub y: u32,
}

impl SpriteCoord {
    /// Create a sprite coordinate
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// One row of a pattern table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternEntry {
    /// Direction labels joined with `_`, in bit order
    pub name: &'static str,
    /// Required neighbour bits
    pub required: u8,
    /// Sprite drawn when the pattern matches
    pub sprite: SpriteCoord,
}

impl PatternEntry {
    /// Check whether `mask` contains every required bit
    pub const fn matches(&self, mask: u8) -> bool {
        mask & self.required == self.required
    }

    /// Number of required directions
    pub const fn specificity(&self) -> u32 {
        self.required.count_ones()
    }
}

/// Ordered pattern list with a fallback sprite
#[derive(Debug, Clone, Copy)]
pub struct PatternTable {
    /// Entries from most to least specific
    pub entries: &'static [PatternEntry],
    /// Sprite for an empty mask or when nothing matches
    pub default: SpriteCoord,
}

impl PatternTable {
    /// Sprite for `mask` under this table
    pub fn resolve(&self, mask: u8) -> SpriteCoord {
        resolve(mask, self)
    }

    /// First entry matching `mask`, if any
    pub fn first_match(&self, mask: u8) -> Option<&'static PatternEntry> {
        if mask == 0 {
            return None;
        }
        self.entries.iter().find(|entry| entry.matches(mask))
    }

    /// Check that no entry requires more directions than the one before it
    pub fn is_most_specific_first(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.specificity() >= b.specificity()))
    }
}

/// Resolve a mask to a sprite: first matching entry in table order, else the default
pub fn resolve(mask: u8, table: &PatternTable) -> SpriteCoord {
    table
        .first_match(mask)
        .map_or(table.default, |entry| entry.sprite)
}

const TL: Direction = Direction::TopLeft;
const T: Direction = Direction::Top;
const TR: Direction = Direction::TopRight;
const L: Direction = Direction::Left;
const R: Direction = Direction::Right;
const BL: Direction = Direction::BottomLeft;
const B: Direction = Direction::Bottom;
const BR: Direction = Direction::BottomRight;

const fn entry(name: &'static str, directions: &[Direction], x: u32, y: u32) -> PatternEntry {
    PatternEntry {
        name,
        required: mask_of(directions),
        sprite: SpriteCoord::new(x, y),
    }
}

/// Sprite of an isolated plot with no qualifying neighbours
pub const ISOLATED: SpriteCoord = SpriteCoord::new(0, 0);

/// Sprite of a plot with all eight neighbours qualifying
pub const FULLY_SURROUNDED: SpriteCoord = SpriteCoord::new(2, 1);

// Farmland and wet-overlay sheets share one 7x8 shape layout
const SHAPE_ENTRIES: [PatternEntry; 46] = [
    entry("TL_T_TR_L_R_BL_B_BR", &[TL, T, TR, L, R, BL, B, BR], 2, 1),
    entry("T_TR_L_R_BL_B_BR", &[T, TR, L, R, BL, B, BR], 5, 4),
    entry("TL_T_L_R_BL_B_BR", &[TL, T, L, R, BL, B, BR], 4, 4),
    entry("TL_T_TR_L_R_BL_B", &[TL, T, TR, L, R, BL, B], 4, 3),
    entry("TL_T_TR_L_R_B_BR", &[TL, T, TR, L, R, B, BR], 5, 3),
    entry("T_L_R_BL_B_BR", &[T, L, R, BL, B, BR], 1, 6),
    entry("TL_T_TR_L_R_B", &[TL, T, TR, L, R, B], 0, 6),
    entry("TL_T_L_R_B_BR", &[TL, T, L, R, B, BR], 6, 3),
    entry("TL_T_L_R_BL_B", &[TL, T, L, R, BL, B], 0, 7),
    entry("T_TR_L_R_BL_B", &[T, TR, L, R, BL, B], 6, 4),
    entry("T_TR_L_R_B_BR", &[T, TR, L, R, B, BR], 1, 7),
    entry("TL_T_L_BL_B", &[TL, T, L, BL, B], 3, 1),
    entry("T_TR_R_B_BR", &[T, TR, R, B, BR], 1, 1),
    entry("TL_T_L_R_B", &[TL, T, L, R, B], 3, 7),
    entry("TL_T_TR_L_R", &[TL, T, TR, L, R], 2, 2),
    entry("L_R_BL_B_BR", &[L, R, BL, B, BR], 2, 0),
    entry("T_L_R_B_BR", &[T, L, R, B, BR], 2, 6),
    entry("T_L_R_BL_B", &[T, L, R, BL, B], 3, 6),
    entry("T_TR_L_R_B", &[T, TR, L, R, B], 2, 7),
    entry("T_L_BL_B", &[T, L, BL, B], 3, 5),
    entry("T_TR_R_B", &[T, TR, R, B], 0, 4),
    entry("T_L_R_B", &[T, L, R, B], 5, 1),
    entry("L_R_BL_B", &[L, R, BL, B], 1, 4),
    entry("L_R_B_BR", &[L, R, B, BR], 2, 4),
    entry("TL_T_L_B", &[TL, T, L, B], 3, 4),
    entry("T_R_B_BR", &[T, R, B, BR], 0, 5),
    entry("TL_T_L_R", &[TL, T, L, R], 1, 5),
    entry("T_TR_L_R", &[T, TR, L, R], 2, 5),
    entry("TL_T_L", &[TL, T, L], 3, 2),
    entry("R_B_BR", &[R, B, BR], 1, 0),
    entry("T_R_B", &[T, R, B], 4, 1),
    entry("L_BL_B", &[L, BL, B], 3, 0),
    entry("T_TR_R", &[T, TR, R], 1, 2),
    entry("T_L_R", &[T, L, R], 5, 2),
    entry("L_R_B", &[L, R, B], 5, 0),
    entry("T_L_B", &[T, L, B], 6, 1),
    entry("R_B", &[R, B], 4, 0),
    entry("L_B", &[L, B], 6, 0),
    entry("T_R", &[T, R], 4, 2),
    entry("T_L", &[T, L], 6, 2),
    entry("L_R", &[L, R], 2, 3),
    entry("T_B", &[T, B], 0, 2),
    entry("B", &[B], 0, 1),
    entry("T", &[T], 0, 3),
    entry("R", &[R], 1, 3),
    entry("L", &[L], 3, 3),
];

/// Shape table for the dry farmland sheet
pub const FARMLAND_TABLE: PatternTable = PatternTable {
    entries: &SHAPE_ENTRIES,
    default: ISOLATED,
};

/// Shape table for the wet overlay sheet
pub const WATER_TABLE: PatternTable = PatternTable {
    entries: &SHAPE_ENTRIES,
    default: ISOLATED,
};
