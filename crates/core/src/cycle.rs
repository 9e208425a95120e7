//! Maps elapsed time onto a pair of adjacent palette indices and a blend factor.
//!
//! The cycle oscillates as `o = sin(t·f)·0.5 + 0.5` and sweeps `o·(N−1)`
//! across the table, so it travels forward then back rather than wrapping.

use serde::Serialize;

/// Largest `f64` strictly below 1.0 (one half-ulp under it).
const BLEND_CEILING: f64 = 1.0 - f64::EPSILON / 2.0;

/// Where in the palette table a given instant falls.
///
/// Invariant: `next == (current + 1) % n` and `blend` lies in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleState {
    pub current: usize,
    pub next: usize,
    pub blend: f64,
}

/// Normalized oscillator `sin(t·f)·0.5 + 0.5`, in `[0, 1]`.
pub fn oscillation(t: f64, frequency: f64) -> f64 {
    (t * frequency).sin() * 0.5 + 0.5
}

/// Computes the cycle position for elapsed time `t` over `n` palettes.
///
/// Pure function of its inputs. `n <= 1` is the single-palette case and
/// always yields `(0, 0, 0.0)`. When the oscillator peaks at exactly 1.0
/// the index is held at `n − 2` and the blend pinned just below 1.0.
pub fn cycle_index(t: f64, frequency: f64, n: usize) -> CycleState {
    if n <= 1 {
        return CycleState {
            current: 0,
            next: 0,
            blend: 0.0,
        };
    }

    let pos = oscillation(t, frequency) * (n - 1) as f64;
    let current = (pos.floor().max(0.0) as usize).min(n - 2);
    let blend = (pos - current as f64).clamp(0.0, BLEND_CEILING);

    CycleState {
        current,
        next: (current + 1) % n,
        blend,
    }
}
