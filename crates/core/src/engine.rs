//! The frame driver: one `tick` per rendered frame.
//!
//! [`SkyEngine`] owns the palette table, the rate constants and the spin
//! accumulator. Everything except spin is recomputed from scratch each tick,
//! so two engines fed the same `(t, delta)` sequence produce identical frames.

use crate::blend::blend_palettes;
use crate::clock::Clock;
use crate::color::Rgb8;
use crate::cycle::{cycle_index, CycleState};
use crate::error::EngineError;
use crate::frame::FrameState;
use crate::palette::PaletteTable;
use crate::params::{param_string, SkyParams};
use crate::rotation::{sway, SpinAccumulator};
use serde_json::Value;
use tracing::{debug, warn};

/// Colors shown before the first tick has run.
const IDLE_COLORS: [Rgb8; 3] = [
    Rgb8::new(0xff, 0x8c, 0x42),
    Rgb8::new(0xd2, 0x69, 0x1e),
    Rgb8::new(0xff, 0x6b, 0x35),
];

/// Palette-cycling and rotation engine for the sky backdrop.
#[derive(Debug, Clone)]
pub struct SkyEngine {
    palettes: PaletteTable,
    params: SkyParams,
    spin: SpinAccumulator,
}

impl SkyEngine {
    /// Creates an engine over `palettes` with the given rates.
    ///
    /// Returns `EngineError::InvalidParam` if the rates fail validation.
    pub fn new(palettes: PaletteTable, params: SkyParams) -> Result<Self, EngineError> {
        params.validate()?;
        Ok(Self::from_parts(palettes, params))
    }

    /// The built-in palette table at the design rates.
    pub fn with_defaults() -> Self {
        Self::from_parts(PaletteTable::builtin(), SkyParams::default())
    }

    /// Shared construction path; `params` must already be valid.
    fn from_parts(palettes: PaletteTable, params: SkyParams) -> Self {
        debug!(
            palettes = palettes.len(),
            frequency = params.frequency,
            spin_rate = params.spin_rate,
            "sky engine created"
        );
        Self {
            palettes,
            params,
            spin: SpinAccumulator::new(),
        }
    }

    /// Creates an engine from a JSON params object.
    ///
    /// Reads `palette` (a built-in name or `"all"`), `frequency` and
    /// `spin_rate`, falling back to defaults for missing keys.
    pub fn from_json(params: &Value) -> Result<Self, EngineError> {
        let palettes = PaletteTable::from_name(&param_string(params, "palette", "all"))?;
        Self::new(palettes, SkyParams::from_json(params)?)
    }

    /// Computes the next frame for elapsed time `t` and frame duration `delta`.
    ///
    /// Non-finite or negative inputs are replaced by zero (and logged): a
    /// bad `t` renders the `t = 0` frame and a bad `delta` leaves spin as is.
    pub fn tick(&mut self, t: f64, delta: f64) -> FrameState {
        let t = sanitize("t", t);
        let delta = sanitize("delta", delta);

        let cycle = self.cycle_at(t);
        // cycle_index keeps both indices below len()
        let palettes = self.palettes.palettes();
        let [primary, secondary, accent] = blend_palettes(
            &palettes[cycle.current],
            &palettes[cycle.next],
            cycle.blend,
        );
        let orientation = sway(t);
        let spin = self.spin.advance(delta, self.params.spin_rate);

        FrameState {
            primary,
            secondary,
            accent,
            yaw: orientation.yaw,
            pitch: orientation.pitch,
            spin,
        }
    }

    /// Pulls one sample from `clock` and ticks with it.
    pub fn advance(&mut self, clock: &mut dyn Clock) -> FrameState {
        let sample = clock.sample();
        self.tick(sample.elapsed, sample.delta)
    }

    /// Cycle position at `t`, without touching any state.
    pub fn cycle_at(&self, t: f64) -> CycleState {
        cycle_index(t, self.params.frequency, self.palettes.len())
    }

    /// What the backdrop shows before the first tick.
    pub fn idle_frame() -> FrameState {
        let [primary, secondary, accent] = IDLE_COLORS;
        FrameState {
            primary,
            secondary,
            accent,
            yaw: 0.0,
            pitch: 0.0,
            spin: 0.0,
        }
    }

    /// Current spin accumulator value.
    pub fn spin(&self) -> f64 {
        self.spin.value()
    }

    pub fn palettes(&self) -> &PaletteTable {
        &self.palettes
    }

    pub fn params(&self) -> SkyParams {
        self.params
    }
}

impl Default for SkyEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Replaces a non-finite or negative input with zero.
fn sanitize(name: &'static str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!(input = name, value, "clamping invalid frame input to 0");
        0.0
    }
}
