//! Tool operations driving the tile state machine
//!
//! Tools are the only writers that validate: each one checks that the target
//! tile admits the transition and then stores a tile built with the
//! [`Tile`] constructors. A rejected tool leaves the grid untouched.

use std::fmt;
use std::str::FromStr;

use crate::algorithm::bitset::CropSet;
use crate::io::error::{FarmError, Result, invalid_parameter};
use crate::spatial::grid::TileGrid;
use crate::spatial::tile::{CropId, Terrain, Tile};

/// A tool the player can apply to one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Turn dirt into farmland
    Hoe,
    /// Water farmland
    WateringCan,
    /// Turn farmland back into dirt
    Pickaxe,
    /// Plant a crop on empty farmland
    Seed(CropId),
    /// Collect a mature crop
    Sickle,
}

impl Tool {
    /// Tool name for messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hoe => "hoe",
            Self::WateringCan => "watering can",
            Self::Pickaxe => "pickaxe",
            Self::Seed(_) => "seed",
            Self::Sickle => "sickle",
        }
    }
}

/// Result of a successful tool application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolOutcome {
    /// Tile before the tool acted
    pub before: Tile,
    /// Tile stored afterwards
    pub after: Tile,
    /// Crop collected by a harvest
    pub harvested: Option<CropId>,
}

fn rejected(tool: Tool, x: i32, y: i32, tile: &Tile, reason: &'static str) -> FarmError {
    FarmError::ToolRejected {
        tool: tool.name(),
        x,
        y,
        terrain: tile.terrain,
        reason,
    }
}

/// Compute the tile a tool would produce, without touching the grid
///
/// # Errors
///
/// Returns [`FarmError::ToolRejected`] when the tile does not admit the
/// transition (wrong terrain, occupied plot, immature crop, out of bounds).
pub fn next_tile(
    tool: Tool,
    tile: &Tile,
    x: i32,
    y: i32,
    perennials: &CropSet,
) -> Result<(Tile, Option<CropId>)> {
    match (tool, tile.terrain) {
        (_, Terrain::Void) => Err(rejected(tool, x, y, tile, "outside the grid")),
        (Tool::Hoe, Terrain::Dirt) => Ok((Tile::farmland(), None)),
        (Tool::Hoe, _) => Err(rejected(tool, x, y, tile, "only dirt can be tilled")),
        (_, Terrain::Dirt | Terrain::Grass) => {
            Err(rejected(tool, x, y, tile, "requires farmland"))
        }
        (Tool::WateringCan, Terrain::Farmland) => Ok((tile.with_water(), None)),
        (Tool::Pickaxe, Terrain::Farmland) => Ok((Tile::dirt(), None)),
        (Tool::Seed(crop), Terrain::Farmland) => match tile.crop {
            Some(_) => Err(rejected(tool, x, y, tile, "plot already planted")),
            None => Ok((Tile::planted(crop, tile.watered, 0), None)),
        },
        (Tool::Sickle, Terrain::Farmland) => match tile.crop {
            None => Err(rejected(tool, x, y, tile, "nothing planted")),
            Some(_) if !tile.is_mature() => Err(rejected(tool, x, y, tile, "crop not mature")),
            Some(crop) if perennials.contains(crop) => {
                Ok((Tile::planted(crop, tile.watered, 0), Some(crop)))
            }
            Some(crop) => {
                let mut cleared = Tile::farmland();
                cleared.watered = tile.watered;
                Ok((cleared, Some(crop)))
            }
        },
    }
}

/// Apply a tool to the grid
///
/// # Errors
///
/// Returns [`FarmError::ToolRejected`] when the transition is illegal; the grid
/// is left unchanged in that case.
pub fn apply_tool(
    grid: &mut TileGrid,
    x: i32,
    y: i32,
    tool: Tool,
    perennials: &CropSet,
) -> Result<ToolOutcome> {
    let before = grid.get(x, y);
    let (after, harvested) = next_tile(tool, &before, x, y, perennials)?;
    grid.set(x, y, after);
    Ok(ToolOutcome {
        before,
        after,
        harvested,
    })
}

/// Till dirt into dry, empty farmland
///
/// # Errors
///
/// Fails unless the cell is dirt.
pub fn till(grid: &mut TileGrid, x: i32, y: i32) -> Result<ToolOutcome> {
    apply_tool(grid, x, y, Tool::Hoe, &CropSet::default())
}

/// Water a farmland cell
///
/// # Errors
///
/// Fails unless the cell is farmland.
pub fn water(grid: &mut TileGrid, x: i32, y: i32) -> Result<ToolOutcome> {
    apply_tool(grid, x, y, Tool::WateringCan, &CropSet::default())
}

/// Turn farmland back into dirt, discarding water and crop
///
/// # Errors
///
/// Fails unless the cell is farmland.
pub fn remove_farmland(grid: &mut TileGrid, x: i32, y: i32) -> Result<ToolOutcome> {
    apply_tool(grid, x, y, Tool::Pickaxe, &CropSet::default())
}

/// Plant a crop at stage 0 on empty farmland
///
/// # Errors
///
/// Fails unless the cell is farmland without a crop.
pub fn plant(grid: &mut TileGrid, x: i32, y: i32, crop: CropId) -> Result<ToolOutcome> {
    apply_tool(grid, x, y, Tool::Seed(crop), &CropSet::default())
}

/// Harvest a mature crop; perennial crops keep their id and restart at stage 0
///
/// # Errors
///
/// Fails unless the cell holds a crop at the final growth stage.
pub fn harvest(
    grid: &mut TileGrid,
    x: i32,
    y: i32,
    perennials: &CropSet,
) -> Result<ToolOutcome> {
    apply_tool(grid, x, y, Tool::Sickle, perennials)
}

/// A tool aimed at a cell, as given on the command line
///
/// Text form is `<tool>:<x>,<y>` with tools `till`, `water`, `remove`,
/// `harvest`, or `plant:<x>,<y>:<crop>` where crop is a name or numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolAction {
    /// Tool to apply
    pub tool: Tool,
    /// Target column
    pub x: i32,
    /// Target row
    pub y: i32,
}

fn parse_crop(text: &str) -> Result<CropId> {
    match text.trim().to_ascii_lowercase().as_str() {
        "wheat" => Ok(CropId::WHEAT),
        "tomato" => Ok(CropId::TOMATO),
        "grape" => Ok(CropId::GRAPE),
        other => other
            .parse::<u16>()
            .map(CropId)
            .map_err(|e| invalid_parameter("crop", &other, &e)),
    }
}

fn parse_coordinate(text: &str, parameter: &'static str) -> Result<i32> {
    text.trim()
        .parse::<i32>()
        .map_err(|e| invalid_parameter(parameter, &text, &e))
}

impl FromStr for ToolAction {
    type Err = FarmError;

    fn from_str(text: &str) -> Result<Self> {
        let mut parts = text.split(':');
        let verb = parts.next().unwrap_or_default().trim();
        let position = parts
            .next()
            .ok_or_else(|| invalid_parameter("action", &text, &"expected <tool>:<x>,<y>"))?;
        let (x_text, y_text) = position
            .split_once(',')
            .ok_or_else(|| invalid_parameter("action", &text, &"expected <x>,<y>"))?;
        let x = parse_coordinate(x_text, "x")?;
        let y = parse_coordinate(y_text, "y")?;

        let tool = match verb {
            "till" => Tool::Hoe,
            "water" => Tool::WateringCan,
            "remove" => Tool::Pickaxe,
            "harvest" => Tool::Sickle,
            "plant" => {
                let crop = parts
                    .next()
                    .ok_or_else(|| invalid_parameter("action", &text, &"plant needs a crop"))?;
                Tool::Seed(parse_crop(crop)?)
            }
            other => {
                return Err(invalid_parameter("action", &other, &"unknown tool"));
            }
        };

        if parts.next().is_some() {
            return Err(invalid_parameter("action", &text, &"trailing fields"));
        }

        Ok(Self { tool, x, y })
    }
}

impl fmt::Display for ToolAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tool {
            Tool::Hoe => write!(f, "till:{},{}", self.x, self.y),
            Tool::WateringCan => write!(f, "water:{},{}", self.x, self.y),
            Tool::Pickaxe => write!(f, "remove:{},{}", self.x, self.y),
            Tool::Sickle => write!(f, "harvest:{},{}", self.x, self.y),
            Tool::Seed(crop) => write!(f, "plant:{},{}:{}", self.x, self.y, crop.0),
        }
    }
}
