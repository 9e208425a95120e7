//! PNG export of a recorded frame timeline.
//!
//! Feature-gated behind `png` (default on). The pixel layout itself lives
//! in [`crate::pixel`].

use skyfx_core::{EngineError, FrameState};
use std::path::Path;

use crate::pixel::frames_to_rgba;

/// Writes `frames` as a PNG timeline `frames.len()` wide and `height` tall.
///
/// Returns `EngineError::Io` if there are no frames, the height is zero,
/// the dimensions overflow `u32`, or the write fails.
pub fn write_png(frames: &[FrameState], height: usize, path: &Path) -> Result<(), EngineError> {
    if frames.is_empty() || height == 0 {
        return Err(EngineError::Io("cannot write an empty timeline".into()));
    }
    let w = u32::try_from(frames.len())
        .map_err(|_| EngineError::Io("timeline too wide for PNG".into()))?;
    let h = u32::try_from(height).map_err(|_| EngineError::Io("timeline too tall for PNG".into()))?;
    let rgba = frames_to_rgba(frames, height);
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use skyfx_core::SkyEngine;

    #[test]
    fn write_png_round_trip() {
        let frames = record(&mut SkyEngine::with_defaults(), 30, 64);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strip.png");

        write_png(&frames, 12, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 12);
        // first column, top band: the t = 0 primary (deep purples)
        assert_eq!(img.get_pixel(0, 0).0, [0x93, 0x70, 0xdb, 255]);
    }

    #[test]
    fn write_png_rejects_empty_timeline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let result = write_png(&[], 12, &path);
        assert!(matches!(result, Err(EngineError::Io(_))));
    }

    #[test]
    fn write_png_bad_directory_is_io_error() {
        let frames = vec![SkyEngine::idle_frame(); 2];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("strip.png");
        assert!(matches!(
            write_png(&frames, 3, &path),
            Err(EngineError::Io(_))
        ));
    }
}
