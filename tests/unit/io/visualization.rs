//! Tests for timelapse frame capture and GIF export

#[cfg(test)]
mod tests {
    use farmtile::io::visualization::TimelapseCapture;
    use image::{Rgba, RgbaImage};

    fn frame(shade: u8) -> RgbaImage {
        RgbaImage::from_pixel(32, 16, Rgba([shade, shade, shade, 255]))
    }

    // Tests frames are kept in capture order with their ticks
    // Verified by inserting frames at the front
    #[test]
    fn test_record_frames() {
        let mut capture = TimelapseCapture::new(3);
        capture.record_frame(0, frame(10));
        capture.record_frame(1, frame(20));
        capture.record_frame(2, frame(30));
        assert_eq!(capture.frame_count(), 3);
        assert_eq!(capture.ticks(), vec![0, 1, 2]);
    }

    // Tests an empty capture cannot be exported
    // Verified by writing an empty GIF
    #[test]
    fn test_empty_capture_errors() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let capture = TimelapseCapture::default();
        let output = dir.path().join("empty.gif");
        assert!(capture.export_gif(&output, 400).is_err());
        assert!(!output.exists());
    }

    // Tests GIF export writes a file even with a sub-viewer delay
    // Verified by dividing by the delay instead of flooring it
    #[test]
    fn test_export_gif() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut capture = TimelapseCapture::new(2);
        capture.record_frame(0, frame(0));
        capture.record_frame(1, frame(200));

        let output = dir.path().join("nested").join("growth.gif");
        assert!(capture.export_gif(&output, 5).is_ok());
        assert!(std::fs::metadata(&output).is_ok_and(|meta| meta.len() > 0));
    }
}
