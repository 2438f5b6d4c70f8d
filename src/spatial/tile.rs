//! Per-cell tile records and the terrain/crop vocabulary
//!
//! A tile is a plain value: the grid stores it, tool operations build new ones
//! through the constructors here, and the compositor only reads it. The
//! constructors are the only place that knows which field combinations are
//! reachable (crop data lives on farmland only).

use crate::io::configuration::MAX_GROWTH_STAGE;
use std::fmt;

/// Coarse category of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// Sentinel returned for out-of-bounds reads, never stored
    Void,
    /// Bare walkable soil
    Dirt,
    /// Untillable grass border
    Grass,
    /// Tilled soil that accepts water and seeds
    Farmland,
}

impl Terrain {
    /// Integer code used by the persisted state format
    pub const fn code(self) -> i8 {
        match self {
            Self::Void => -1,
            Self::Dirt => 0,
            Self::Grass => 1,
            Self::Farmland => 2,
        }
    }

    /// Inverse of [`Terrain::code`]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Self::Void),
            0 => Some(Self::Dirt),
            1 => Some(Self::Grass),
            2 => Some(Self::Farmland),
            _ => None,
        }
    }

    /// Lowercase name for log and error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Dirt => "dirt",
            Self::Grass => "grass",
            Self::Farmland => "farmland",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier of a crop variant
///
/// Doubles as the row selector in the crop sprite sheet (each crop occupies
/// two sheet rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CropId(pub u16);

impl CropId {
    /// Wheat
    pub const WHEAT: Self = Self(0);
    /// Tomato
    pub const TOMATO: Self = Self(1);
    /// Grape, the perennial variant
    pub const GRAPE: Self = Self(21);

    /// Raw numeric id
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::WHEAT => f.write_str("wheat"),
            Self::TOMATO => f.write_str("tomato"),
            Self::GRAPE => f.write_str("grape"),
            Self(id) => write!(f, "crop#{id}"),
        }
    }
}

/// Authoritative state of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Terrain category
    pub terrain: Terrain,
    /// Irrigation flag, meaningful on farmland only
    pub watered: bool,
    /// Planted crop, farmland only
    pub crop: Option<CropId>,
    /// Growth progress in `0..=MAX_GROWTH_STAGE`, meaningful with a crop only
    pub growth_stage: u8,
}

impl Tile {
    const fn bare(terrain: Terrain) -> Self {
        Self {
            terrain,
            watered: false,
            crop: None,
            growth_stage: 0,
        }
    }

    /// Out-of-bounds sentinel
    pub const fn void() -> Self {
        Self::bare(Terrain::Void)
    }

    /// Plain dirt
    pub const fn dirt() -> Self {
        Self::bare(Terrain::Dirt)
    }

    /// Plain grass
    pub const fn grass() -> Self {
        Self::bare(Terrain::Grass)
    }

    /// Freshly tilled, dry, empty farmland
    pub const fn farmland() -> Self {
        Self::bare(Terrain::Farmland)
    }

    /// Farmland holding `crop` at `growth_stage` (clamped to the maximum)
    pub const fn planted(crop: CropId, watered: bool, growth_stage: u8) -> Self {
        let growth_stage = if growth_stage > MAX_GROWTH_STAGE {
            MAX_GROWTH_STAGE
        } else {
            growth_stage
        };
        Self {
            terrain: Terrain::Farmland,
            watered,
            crop: Some(crop),
            growth_stage,
        }
    }

    /// Copy of this tile with the irrigation flag set
    #[must_use]
    pub const fn with_water(mut self) -> Self {
        self.watered = true;
        self
    }

    /// True for tilled soil
    pub const fn is_farmland(&self) -> bool {
        matches!(self.terrain, Terrain::Farmland)
    }

    /// True for dirt or farmland, the cells grass borders react to
    pub const fn is_soil(&self) -> bool {
        matches!(self.terrain, Terrain::Dirt | Terrain::Farmland)
    }

    /// True when watered and holding a crop, i.e. the growth clock applies
    pub const fn is_growing(&self) -> bool {
        self.is_farmland() && self.watered && self.crop.is_some()
    }

    /// True when a planted crop has reached the final stage
    pub const fn is_mature(&self) -> bool {
        self.crop.is_some() && self.growth_stage >= MAX_GROWTH_STAGE
    }

    /// Check that the field combination is one the state machine can produce
    pub const fn is_reachable(&self) -> bool {
        match self.terrain {
            Terrain::Void => false,
            Terrain::Dirt | Terrain::Grass => {
                !self.watered && self.crop.is_none() && self.growth_stage == 0
            }
            Terrain::Farmland => {
                self.growth_stage <= MAX_GROWTH_STAGE
                    && (self.crop.is_some() || self.growth_stage == 0)
            }
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::dirt()
    }
}
