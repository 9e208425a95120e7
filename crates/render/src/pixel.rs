//! Pure-computation pixel buffer conversion from recorded frames.
//!
//! This module is always available (no feature gate) so that callers can
//! get at the raw RGBA buffer without pulling in the `image` crate.

use skyfx_core::{ColorRole, FrameState};

/// Band a given row falls into when a column of `height` pixels is split
/// into primary, secondary and accent thirds.
pub fn band_for_row(row: usize, height: usize) -> ColorRole {
    let third = (row * 3) / height.max(1);
    match third {
        0 => ColorRole::Primary,
        1 => ColorRole::Secondary,
        _ => ColorRole::Accent,
    }
}

/// Lays `frames` out as an RGBA8 timeline, one column per frame.
///
/// Each column is split top to bottom into primary, secondary and accent
/// bands. The buffer length is `frames.len() * height * 4`, row-major.
pub fn frames_to_rgba(frames: &[FrameState], height: usize) -> Vec<u8> {
    (0..height)
        .flat_map(move |row| {
            let role = band_for_row(row, height);
            frames.iter().flat_map(move |frame| {
                let [r, g, b] = frame.color(role).channels();
                [r, g, b, 255u8]
            })
        })
        .collect()
}
