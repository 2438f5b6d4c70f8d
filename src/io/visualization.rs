//! Frame capture and GIF generation for growth timelapses

use std::path::Path;

use image::{Delay, Frame, RgbaImage};

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{FarmError, Result, invalid_parameter};

/// Collects rendered frames, one per captured tick
///
/// Frames are stored as finished images so the capture is independent of the
/// sprite sheets once recorded.
#[derive(Debug, Default)]
pub struct TimelapseCapture {
    frames: Vec<(usize, RgbaImage)>,
}

impl TimelapseCapture {
    /// Start an empty capture with room for `expected_frames`
    pub fn new(expected_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_frames),
        }
    }

    /// Record the frame rendered after `tick`
    pub fn record_frame(&mut self, tick: usize, frame: RgbaImage) {
        self.frames.push((tick, frame));
    }

    /// Ticks at which frames were captured
    pub fn ticks(&self) -> Vec<usize> {
        self.frames.iter().map(|(tick, _)| *tick).collect()
    }

    /// Number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// Delays below what viewers reliably honour are raised to
    /// [`VIEWER_MIN_FRAME_DELAY_MS`]. The last frame is held three times as
    /// long so the final state is readable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "timelapse",
                &output_path.display(),
                &"no frames captured",
            ));
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let last = self.frames.len() - 1;
        let frames = self.frames.iter().enumerate().map(|(index, (_, image))| {
            let hold = if index == last { delay_ms * 3 } else { delay_ms };
            Frame::from_parts(image.clone(), 0, 0, Delay::from_numer_denom_ms(hold, 1))
        });

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| FarmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| FarmError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| FarmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }
}
