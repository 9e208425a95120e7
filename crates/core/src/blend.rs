//! Linear interpolation between two 8-bit colors.
//!
//! Rounding is always half-away-from-zero (`f64::round`); since every
//! interpolated value is non-negative this behaves as round-half-up, and a
//! blend factor drifting across `.5` never flips direction frame to frame.

use crate::color::Rgb8;
use crate::palette::Palette;

/// Interpolates one channel: `round(a + (b − a)·t)`, clamped to `[0, 255]`.
pub fn blend_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

/// Interpolates each channel of `c1` toward `c2` by factor `t`.
///
/// `t == 0` returns `c1` exactly.
pub fn blend_rgb(c1: Rgb8, c2: Rgb8, t: f64) -> Rgb8 {
    Rgb8 {
        r: blend_channel(c1.r, c2.r, t),
        g: blend_channel(c1.g, c2.g, t),
        b: blend_channel(c1.b, c2.b, t),
    }
}

/// Blends the three role colors of two palettes independently.
///
/// Returns `[primary, secondary, accent]`.
pub fn blend_palettes(from: &Palette, to: &Palette, t: f64) -> [Rgb8; 3] {
    [
        blend_rgb(from.primary, to.primary, t),
        blend_rgb(from.secondary, to.secondary, t),
        blend_rgb(from.accent, to.accent, t),
    ]
}
