//! Error types for grid, persistence and rendering operations

use std::fmt;
use std::path::PathBuf;

use crate::algorithm::compositor::SpriteSheet;
use crate::algorithm::patterns::SpriteCoord;
use crate::spatial::tile::Terrain;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum FarmError {
    /// Failed to load a sprite sheet from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Persisted state is not valid JSON or not shaped like a grid
    Serialization {
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Persisted state parsed but describes an impossible grid
    ///
    /// Covers wrong row/column counts, unknown terrain codes, out-of-range
    /// growth stages and field combinations no tool can produce.
    MalformedState {
        /// Description of what's wrong with the state
        reason: String,
    },

    /// A tool was used on a tile it cannot act on
    ToolRejected {
        /// Tool name
        tool: &'static str,
        /// Column of the target cell
        x: i32,
        /// Row of the target cell
        y: i32,
        /// Terrain found at the target cell
        terrain: Terrain,
        /// Why the transition is illegal
        reason: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A draw instruction points outside its sprite sheet
    SpriteOutOfBounds {
        /// Sheet being sampled
        sheet: SpriteSheet,
        /// Requested sprite coordinate
        sprite: SpriteCoord,
        /// Sheet size in pixels (width, height)
        sheet_dimensions: (u32, u32),
    },
}

impl fmt::Display for FarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Invalid saved state: {source}")
            }
            Self::MalformedState { reason } => {
                write!(f, "Malformed saved state: {reason}")
            }
            Self::ToolRejected {
                tool,
                x,
                y,
                terrain,
                reason,
            } => {
                write!(f, "Cannot use {tool} on {terrain} at ({x}, {y}): {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SpriteOutOfBounds {
                sheet,
                sprite,
                sheet_dimensions,
            } => {
                write!(
                    f,
                    "Sprite ({}, {}) lies outside the {sheet} sheet ({}x{} px)",
                    sprite.x, sprite.y, sheet_dimensions.0, sheet_dimensions.1
                )
            }
        }
    }
}

impl std::error::Error for FarmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, FarmError>;

impl From<serde_json::Error> for FarmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

impl From<std::io::Error> for FarmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FarmError {
    FarmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed state error
pub fn malformed_state(reason: impl Into<String>) -> FarmError {
    FarmError::MalformedState {
        reason: reason.into(),
    }
}
