#![deny(unsafe_code)]
//! Core of the skyfx animated backdrop.
//!
//! Provides the `PaletteTable` of mood colors, the time-driven cycle index,
//! the `Rgb8` color blender, the sway/spin rotation integrator, `Clock`
//! sources, and the `SkyEngine` frame driver that ties them into one
//! `FrameState` per rendered frame.

pub mod blend;
pub mod clock;
pub mod color;
pub mod cycle;
pub mod engine;
pub mod error;
pub mod frame;
pub mod palette;
pub mod params;
pub mod rotation;

pub use clock::{Clock, ClockSample, FixedStepClock, ReplayClock, SystemClock};
pub use color::Rgb8;
pub use cycle::CycleState;
pub use engine::SkyEngine;
pub use error::EngineError;
pub use frame::{ColorRole, FrameState};
pub use palette::{Palette, PaletteTable};
pub use params::SkyParams;
