/// Command-line interface and scripted session runner
pub mod cli;
/// Grid, sprite and runtime constants
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Sprite sheet loading and frame rendering
pub mod image;
/// JSON save format for the tile grid
pub mod persistence;
/// Growth tick progress display
pub mod progress;
/// Timelapse capture and GIF export
pub mod visualization;
