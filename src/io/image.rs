//! Sprite sheet loading and PNG frame rendering
//!
//! Frames are painted by blitting each draw instruction's sprite at its cell
//! position in list order, so later layers cover earlier ones.

use std::path::Path;

use image::{RgbaImage, imageops};

use crate::algorithm::compositor::{DrawInstruction, SpriteSheet};
use crate::io::configuration::{
    CROPS_SHEET_FILE, FARMLAND_SHEET_FILE, GRASS_SHEET_FILE, TILE_SIZE, WET_FARMLAND_SHEET_FILE,
};
use crate::io::error::{FarmError, Result, invalid_parameter};

/// The four sheets a draw list can reference
#[derive(Debug, Clone)]
pub struct SpriteSheets {
    grass: RgbaImage,
    farmland: RgbaImage,
    wet_farmland: RgbaImage,
    crops: RgbaImage,
}

fn load_sheet(path: &Path) -> Result<RgbaImage> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| FarmError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })
}

impl SpriteSheets {
    /// Load the standard sheet files from an asset directory
    ///
    /// # Errors
    ///
    /// Returns an error if any sheet is missing or cannot be decoded.
    pub fn load(asset_dir: &Path) -> Result<Self> {
        Ok(Self {
            grass: load_sheet(&asset_dir.join(GRASS_SHEET_FILE))?,
            farmland: load_sheet(&asset_dir.join(FARMLAND_SHEET_FILE))?,
            wet_farmland: load_sheet(&asset_dir.join(WET_FARMLAND_SHEET_FILE))?,
            crops: load_sheet(&asset_dir.join(CROPS_SHEET_FILE))?,
        })
    }

    /// Build from already decoded sheets
    pub const fn from_images(
        grass: RgbaImage,
        farmland: RgbaImage,
        wet_farmland: RgbaImage,
        crops: RgbaImage,
    ) -> Self {
        Self {
            grass,
            farmland,
            wet_farmland,
            crops,
        }
    }

    /// Image backing a sheet
    pub const fn sheet(&self, sheet: SpriteSheet) -> &RgbaImage {
        match sheet {
            SpriteSheet::Grass => &self.grass,
            SpriteSheet::Farmland => &self.farmland,
            SpriteSheet::WetFarmland => &self.wet_farmland,
            SpriteSheet::Crops => &self.crops,
        }
    }
}

/// Paint a draw list onto a transparent canvas of `width x height` cells
///
/// Instructions outside the canvas are clipped by the overlay.
///
/// # Errors
///
/// Returns [`FarmError::InvalidParameter`] if the frame would be wider or
/// taller than `u32::MAX` pixels, and [`FarmError::SpriteOutOfBounds`] if an
/// instruction references a sprite that does not fit inside its sheet.
pub fn render_frame(
    instructions: &[DrawInstruction],
    sheets: &SpriteSheets,
    width: usize,
    height: usize,
) -> Result<RgbaImage> {
    let mut canvas = RgbaImage::new(
        canvas_extent(width, "width")?,
        canvas_extent(height, "height")?,
    );

    for instruction in instructions {
        let source = sheets.sheet(instruction.sheet);
        let left = instruction.sprite.x * TILE_SIZE;
        let top = instruction.sprite.y * TILE_SIZE;

        if left + TILE_SIZE > source.width() || top + TILE_SIZE > source.height() {
            return Err(FarmError::SpriteOutOfBounds {
                sheet: instruction.sheet,
                sprite: instruction.sprite,
                sheet_dimensions: source.dimensions(),
            });
        }

        let sprite = imageops::crop_imm(source, left, top, TILE_SIZE, TILE_SIZE).to_image();
        imageops::overlay(
            &mut canvas,
            &sprite,
            i64::from(instruction.x) * i64::from(TILE_SIZE),
            i64::from(instruction.y) * i64::from(TILE_SIZE),
        );
    }

    Ok(canvas)
}

// Pixel length of `cells` tiles, which must fit in a u32
fn canvas_extent(cells: usize, parameter: &'static str) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(TILE_SIZE))
        .ok_or_else(|| invalid_parameter(parameter, &cells, &"frame exceeds u32 pixels"))
}

/// Save a rendered frame as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot be
/// written.
pub fn export_frame_as_png(frame: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FarmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    frame
        .save(output_path)
        .map_err(|e| FarmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
