//! Orientation signals for the decorative groups.
//!
//! Yaw and pitch are pure functions of elapsed time. Spin is a running
//! accumulator: it depends on the exact sequence of frame deltas and so
//! lives in an owned [`SpinAccumulator`] rather than being recomputed.

use serde::Serialize;

/// Divisor applied to elapsed time before the sway trig functions.
const SWAY_PERIOD_DIVISOR: f64 = 8.0;
/// Divisor applied to the sway amplitude (max ±0.25 rad).
const SWAY_AMPLITUDE_DIVISOR: f64 = 4.0;

/// Time-driven orientation of the primary decorative group, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Orientation {
    pub yaw: f64,
    pub pitch: f64,
}

/// `yaw = cos(t/8)/4`, `pitch = sin(t/8)/4`.
pub fn sway(t: f64) -> Orientation {
    let phase = t / SWAY_PERIOD_DIVISOR;
    Orientation {
        yaw: phase.cos() / SWAY_AMPLITUDE_DIVISOR,
        pitch: phase.sin() / SWAY_AMPLITUDE_DIVISOR,
    }
}

/// Path-dependent spin state, decreasing by `delta·rate` every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpinAccumulator {
    spin: f64,
}

impl SpinAccumulator {
    /// Starts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one tick: `spin ← spin − delta·rate`. Returns the new value.
    pub fn advance(&mut self, delta: f64, rate: f64) -> f64 {
        self.spin -= delta * rate;
        self.spin
    }

    /// Current accumulated spin in radians.
    pub fn value(&self) -> f64 {
        self.spin
    }
}
