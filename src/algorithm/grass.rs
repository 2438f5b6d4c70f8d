//! Closed-form sprite lookup for grass bordering soil
//!
//! Grass only distinguishes a handful of adjacency shapes, so masks are matched
//! exactly against literal values instead of going through the subset-pattern
//! resolver. Anything not listed is drawn as middle grass.

use crate::algorithm::patterns::SpriteCoord;

/// Grass with no soil neighbours
pub const MIDDLE_GRASS: SpriteCoord = SpriteCoord::new(5, 3);
/// Soil below
pub const TOP_EDGE: SpriteCoord = SpriteCoord::new(1, 5);
/// Soil above
pub const BOTTOM_EDGE: SpriteCoord = SpriteCoord::new(1, 7);
/// Soil to the right
pub const LEFT_EDGE: SpriteCoord = SpriteCoord::new(0, 6);
/// Soil to the left
pub const RIGHT_EDGE: SpriteCoord = SpriteCoord::new(2, 6);
/// Soil only diagonally bottom-right
pub const TOP_LEFT_CORNER: SpriteCoord = SpriteCoord::new(0, 5);
/// Soil only diagonally bottom-left
pub const TOP_RIGHT_CORNER: SpriteCoord = SpriteCoord::new(2, 5);
/// Soil only diagonally top-right
pub const BOTTOM_LEFT_CORNER: SpriteCoord = SpriteCoord::new(0, 7);
/// Soil only diagonally top-left
pub const BOTTOM_RIGHT_CORNER: SpriteCoord = SpriteCoord::new(2, 7);
/// Soil wrapping the top-left quadrant
pub const BOTTOM_RIGHT_DIRT: SpriteCoord = SpriteCoord::new(0, 8);
/// Soil wrapping the top-right quadrant
pub const BOTTOM_LEFT_DIRT: SpriteCoord = SpriteCoord::new(1, 8);
/// Soil wrapping the bottom-left quadrant
pub const TOP_RIGHT_DIRT: SpriteCoord = SpriteCoord::new(0, 9);
/// Soil wrapping the bottom-right quadrant
pub const TOP_LEFT_DIRT: SpriteCoord = SpriteCoord::new(1, 9);

/// Sprite for a grass cell given its soil-neighbour mask
pub const fn grass_sprite(soil_mask: u8) -> SpriteCoord {
    match soil_mask {
        0b0000_0010 | 0b0000_0110 | 0b0000_0011 | 0b0000_0111 => TOP_EDGE,
        0b0100_0000 | 0b1100_0000 | 0b0110_0000 | 0b1110_0000 => BOTTOM_EDGE,
        0b0000_1000 | 0b0010_1001 | 0b0010_1000 | 0b0000_1001 => LEFT_EDGE,
        0b0001_0000 | 0b1001_0100 | 0b1001_0000 | 0b0001_0100 => RIGHT_EDGE,
        0b0000_0001 => TOP_LEFT_CORNER,
        0b0000_0100 => TOP_RIGHT_CORNER,
        0b0010_0000 => BOTTOM_LEFT_CORNER,
        0b1000_0000 => BOTTOM_RIGHT_CORNER,
        0b1101_0000 | 0b1111_0100 | 0b1101_0100 | 0b1111_0000 => BOTTOM_RIGHT_DIRT,
        0b0110_1000 | 0b1110_1001 | 0b0110_1001 | 0b1110_1000 => BOTTOM_LEFT_DIRT,
        0b0001_0110 | 0b1001_0111 | 0b0001_0111 | 0b1001_0110 => TOP_RIGHT_DIRT,
        0b0000_1011 | 0b0010_1111 | 0b0000_1111 | 0b0010_1011 => TOP_LEFT_DIRT,
        _ => MIDDLE_GRASS,
    }
}
