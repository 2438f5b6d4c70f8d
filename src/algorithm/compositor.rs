//! Per-cell layer selection and draw list assembly
//!
//! Each cell yields up to three instructions in a fixed order: base terrain,
//! water overlay, crop. Later layers are drawn over earlier ones, so the order
//! is part of the output contract.

use std::fmt;

use crate::algorithm::grass::grass_sprite;
use crate::algorithm::patterns::{FARMLAND_TABLE, SpriteCoord, WATER_TABLE};
use crate::io::configuration::{CROP_ROW_STRIDE, CROP_STAGE_COLUMN_OFFSET};
use crate::spatial::grid::TileGrid;
use crate::spatial::neighbors::{farmland_mask, soil_mask, watered_mask};
use crate::spatial::tile::{CropId, Terrain};

/// The dirt path sprite on the grass sheet
pub const PATH: SpriteCoord = SpriteCoord::new(1, 6);

/// Image an instruction samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSheet {
    /// Grass borders and the dirt path
    Grass,
    /// Dry farmland shapes
    Farmland,
    /// Wet farmland overlay shapes
    WetFarmland,
    /// Crop growth stages
    Crops,
}

impl fmt::Display for SpriteSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Grass => "grass",
            Self::Farmland => "farmland",
            Self::WetFarmland => "wet farmland",
            Self::Crops => "crops",
        })
    }
}

/// Draw layer, in painting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Grass, dirt path or farmland shape
    Base,
    /// Wet farmland overlay
    WaterOverlay,
    /// Planted crop
    Crop,
}

/// One sprite blit for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawInstruction {
    /// Target column
    pub x: i32,
    /// Target row
    pub y: i32,
    /// Layer the sprite belongs to
    pub layer: Layer,
    /// Source sheet
    pub sheet: SpriteSheet,
    /// Sprite within the sheet
    pub sprite: SpriteCoord,
}

/// Crop sprite for a growth stage: column by stage, row pair by crop
pub const fn crop_sprite(crop: CropId, growth_stage: u8) -> SpriteCoord {
    SpriteCoord::new(
        CROP_STAGE_COLUMN_OFFSET + growth_stage as u32,
        CROP_ROW_STRIDE * crop.0 as u32,
    )
}

/// Draw instructions for one cell
///
/// Out-of-bounds coordinates read as void and produce nothing.
pub fn compose_cell(grid: &TileGrid, x: i32, y: i32) -> Vec<DrawInstruction> {
    let mut instructions = Vec::with_capacity(3);
    let mut push = |layer, sheet, sprite| {
        instructions.push(DrawInstruction {
            x,
            y,
            layer,
            sheet,
            sprite,
        });
    };

    let tile = grid.get(x, y);
    match tile.terrain {
        Terrain::Void => {}
        Terrain::Dirt => push(Layer::Base, SpriteSheet::Grass, PATH),
        Terrain::Grass => {
            let sprite = grass_sprite(soil_mask(grid, x, y));
            push(Layer::Base, SpriteSheet::Grass, sprite);
        }
        Terrain::Farmland => {
            let base = FARMLAND_TABLE.resolve(farmland_mask(grid, x, y));
            push(Layer::Base, SpriteSheet::Farmland, base);

            if tile.watered {
                let overlay = WATER_TABLE.resolve(watered_mask(grid, x, y));
                push(Layer::WaterOverlay, SpriteSheet::WetFarmland, overlay);
            }

            if let Some(crop) = tile.crop {
                push(
                    Layer::Crop,
                    SpriteSheet::Crops,
                    crop_sprite(crop, tile.growth_stage),
                );
            }
        }
    }

    instructions
}

/// Draw instructions for the whole grid, row-major, layers in order per cell
pub fn compose(grid: &TileGrid) -> Vec<DrawInstruction> {
    grid.iter()
        .flat_map(|(x, y, _)| compose_cell(grid, x, y))
        .collect()
}
