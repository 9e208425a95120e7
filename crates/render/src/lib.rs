#![deny(unsafe_code)]
//! Offline rendering of skyfx frame sequences.
//!
//! Runs a [`SkyEngine`] over a deterministic clock and lays the resulting
//! colors out as a timeline image, one column per frame. Both the CLI and
//! tests use this to inspect a cycle without a live 3D renderer.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use skyfx_core::{FixedStepClock, FrameState, SkyEngine};

/// Runs `engine` for `frames` ticks at `fps` and collects every frame.
pub fn record(engine: &mut SkyEngine, fps: u32, frames: usize) -> Vec<FrameState> {
    let mut clock = FixedStepClock::from_fps(fps);
    (0..frames).map(|_| engine.advance(&mut clock)).collect()
}
