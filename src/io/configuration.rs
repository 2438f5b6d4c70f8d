//! Grid, sprite and runtime configuration defaults

// Grid shape
/// Default number of columns
pub const MAP_WIDTH: usize = 20;
/// Default number of rows
pub const MAP_HEIGHT: usize = 10;

/// Edge length of one sprite in pixels
pub const TILE_SIZE: u32 = 16;

/// Final growth stage of a planted crop
pub const MAX_GROWTH_STAGE: u8 = 3;

// Crop sheet layout: stage columns start after the seed/icon columns and each
// crop spans two rows
/// First sprite column used by growth stages
pub const CROP_STAGE_COLUMN_OFFSET: u32 = 2;
/// Sprite rows occupied by one crop variant
pub const CROP_ROW_STRIDE: u32 = 2;

/// Persisted crop id meaning "no crop"
pub const NO_CROP: i32 = -1;

// Sprite sheet file names inside an asset directory
/// Grass borders, middle grass and the dirt path sprite
pub const GRASS_SHEET_FILE: &str = "Grass_Tiles_1.png";
/// Dry farmland shapes
pub const FARMLAND_SHEET_FILE: &str = "FarmLand_Tile.png";
/// Wet farmland overlay shapes
pub const WET_FARMLAND_SHEET_FILE: &str = "FarmLand_Wet_Tile.png";
/// Crop growth stages
pub const CROPS_SHEET_FILE: &str = "Crops.png";

// Default values for configurable parameters
/// Fixed seed for reproducible reversion rolls
pub const DEFAULT_SEED: u64 = 42;

/// Per-tick chance that empty farmland reverts to dirt
pub const DEFAULT_REVERSION_CHANCE: f64 = 0.0;

// Safety limit for the CLI tick loop
/// Maximum growth ticks accepted in one run
pub const MAX_TICKS_PER_RUN: usize = 10_000;

// Progress bar display settings
/// Minimum tick count before a progress bar is shown
pub const PROGRESS_THRESHOLD_TICKS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Delay between timelapse GIF frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
