//! JSON save format for the tile grid
//!
//! The layout is an array of rows, each an array of records with fields in the
//! fixed order `type, watered, cropID, growthStage`. Loading is all-or-nothing:
//! the payload is parsed and validated into a fresh grid before anything is
//! handed back, so a corrupt save can never leave a half-applied grid.

use std::fs;
use std::path::Path;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::io::configuration::{MAX_GROWTH_STAGE, NO_CROP};
use crate::io::error::{FarmError, Result, malformed_state};
use crate::spatial::grid::TileGrid;
use crate::spatial::tile::{CropId, Terrain, Tile};

/// One persisted cell
///
/// Fields are wide integers so that out-of-range values reach validation
/// instead of failing inside the JSON parser with a less useful message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TileRecord {
    /// Terrain code (0 dirt, 1 grass, 2 farmland)
    #[serde(rename = "type")]
    pub terrain: i64,
    /// Irrigation flag
    pub watered: bool,
    /// Crop id, or -1 for none
    #[serde(rename = "cropID")]
    pub crop_id: i64,
    /// Growth stage
    #[serde(rename = "growthStage")]
    pub growth_stage: i64,
}

impl From<&Tile> for TileRecord {
    fn from(tile: &Tile) -> Self {
        Self {
            terrain: i64::from(tile.terrain.code()),
            watered: tile.watered,
            crop_id: tile
                .crop
                .map_or(i64::from(NO_CROP), |crop| i64::from(crop.0)),
            growth_stage: i64::from(tile.growth_stage),
        }
    }
}

impl TileRecord {
    /// Convert to a tile, rejecting codes and combinations no grid can hold
    ///
    /// # Errors
    ///
    /// Returns [`FarmError::MalformedState`] naming the cell and the problem.
    pub fn to_tile(&self, x: usize, y: usize) -> Result<Tile> {
        let terrain = match Terrain::from_code(self.terrain) {
            Some(Terrain::Void) | None => {
                return Err(malformed_state(format!(
                    "cell ({x}, {y}) has invalid terrain code {}",
                    self.terrain
                )));
            }
            Some(terrain) => terrain,
        };

        let crop = match self.crop_id {
            id if id == i64::from(NO_CROP) => None,
            id => Some(u16::try_from(id).map(CropId).map_err(|e| {
                malformed_state(format!("cell ({x}, {y}) has invalid crop id {id}: {e}"))
            })?),
        };

        let growth_stage = u8::try_from(self.growth_stage)
            .ok()
            .filter(|stage| *stage <= MAX_GROWTH_STAGE)
            .ok_or_else(|| {
                malformed_state(format!(
                    "cell ({x}, {y}) has growth stage {} outside 0..={MAX_GROWTH_STAGE}",
                    self.growth_stage
                ))
            })?;

        let tile = Tile {
            terrain,
            watered: self.watered,
            crop,
            growth_stage,
        };

        if tile.is_reachable() {
            Ok(tile)
        } else {
            Err(malformed_state(format!(
                "cell ({x}, {y}) holds an impossible {terrain} state"
            )))
        }
    }
}

/// Serialize the grid row-major
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn encode_grid(grid: &TileGrid) -> Result<String> {
    let rows: Vec<Vec<TileRecord>> = (0..grid.height())
        .filter_map(|y| grid.row(y))
        .map(|row| row.map(TileRecord::from).collect())
        .collect();
    Ok(serde_json::to_string(&rows)?)
}

/// Parse and validate a saved grid of the expected dimensions
///
/// # Errors
///
/// Returns [`FarmError::Serialization`] for JSON that is not an array of
/// record arrays, and [`FarmError::MalformedState`] for wrong row or column
/// counts or invalid cells.
pub fn decode_grid(json: &str, width: usize, height: usize) -> Result<TileGrid> {
    let rows: Vec<Vec<TileRecord>> = serde_json::from_str(json)?;

    if rows.len() != height {
        return Err(malformed_state(format!(
            "expected {height} rows, found {}",
            rows.len()
        )));
    }

    let mut tiles = Vec::with_capacity(width * height);
    for (y, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(malformed_state(format!(
                "row {y} has {} cells, expected {width}",
                row.len()
            )));
        }
        for (x, record) in row.iter().enumerate() {
            tiles.push(record.to_tile(x, y)?);
        }
    }

    let cells = Array2::from_shape_vec((height, width), tiles)
        .map_err(|e| malformed_state(e.to_string()))?;
    Ok(TileGrid::from_cells(cells))
}

/// Write the grid to a JSON file, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_grid(grid: &TileGrid, path: &Path) -> Result<()> {
    let json = encode_grid(grid)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| FarmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    fs::write(path, json).map_err(|e| FarmError::FileSystem {
        path: path.to_path_buf(),
        operation: "write state",
        source: e,
    })
}

/// Read the raw JSON of a saved grid
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_state(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FarmError::FileSystem {
        path: path.to_path_buf(),
        operation: "read state",
        source: e,
    })
}

/// Read and decode a saved grid
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode.
pub fn load_grid(path: &Path, width: usize, height: usize) -> Result<TileGrid> {
    decode_grid(&read_state(path)?, width, height)
}
