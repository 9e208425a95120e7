//! Time sources feeding the frame driver.
//!
//! A [`Clock`] yields one [`ClockSample`] per rendered frame. The trait is
//! object-safe so the render loop can hold a `Box<dyn Clock>` and tests can
//! swap in a deterministic source.

use serde::Serialize;
use std::time::Instant;

/// Elapsed time and frame delta, both in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ClockSample {
    pub elapsed: f64,
    pub delta: f64,
}

/// Source of per-frame timing.
pub trait Clock {
    /// Advance to the next frame and report its timing.
    fn sample(&mut self) -> ClockSample;
}

/// Deterministic clock advancing by a constant step.
///
/// The first sample is `(0, 0)`; each later sample adds `dt`.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    dt: f64,
    frame: u64,
}

impl FixedStepClock {
    pub fn new(dt: f64) -> Self {
        Self { dt, frame: 0 }
    }

    /// A clock stepping at `fps` frames per second.
    pub fn from_fps(fps: u32) -> Self {
        Self::new(1.0 / f64::from(fps.max(1)))
    }

    /// Number of samples taken so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Clock for FixedStepClock {
    fn sample(&mut self) -> ClockSample {
        let sample = if self.frame == 0 {
            ClockSample::default()
        } else {
            ClockSample {
                // multiply instead of summing so long runs don't drift
                elapsed: self.frame as f64 * self.dt,
                delta: self.dt,
            }
        };
        self.frame += 1;
        sample
    }
}

/// Replays a recorded sequence of frame deltas.
///
/// Elapsed time is the running sum of the deltas replayed so far.
#[derive(Debug, Clone)]
pub struct ReplayClock {
    deltas: Vec<f64>,
    cursor: usize,
    elapsed: f64,
}

impl ReplayClock {
    pub fn new(deltas: Vec<f64>) -> Self {
        Self {
            deltas,
            cursor: 0,
            elapsed: 0.0,
        }
    }

    /// Next recorded sample, or `None` once the recording is exhausted.
    pub fn next_sample(&mut self) -> Option<ClockSample> {
        let delta = *self.deltas.get(self.cursor)?;
        self.cursor += 1;
        self.elapsed += delta;
        Some(ClockSample {
            elapsed: self.elapsed,
            delta,
        })
    }

    /// Deltas not yet replayed.
    pub fn remaining(&self) -> usize {
        self.deltas.len() - self.cursor
    }
}

impl Clock for ReplayClock {
    /// Past the end of the recording time stands still.
    fn sample(&mut self) -> ClockSample {
        self.next_sample().unwrap_or(ClockSample {
            elapsed: self.elapsed,
            delta: 0.0,
        })
    }
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
    last: Option<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last: None,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn sample(&mut self) -> ClockSample {
        let now = Instant::now();
        let delta = self
            .last
            .map(|last| now.duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last = Some(now);
        ClockSample {
            elapsed: now.duration_since(self.start).as_secs_f64(),
            delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_step_first_sample_is_zero() {
        let mut clock = FixedStepClock::new(0.5);
        assert_eq!(clock.sample(), ClockSample::default());
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn fixed_step_advances_by_dt() {
        let mut clock = FixedStepClock::new(0.5);
        clock.sample();
        let s1 = clock.sample();
        let s2 = clock.sample();
        assert_eq!(s1, ClockSample { elapsed: 0.5, delta: 0.5 });
        assert_eq!(s2, ClockSample { elapsed: 1.0, delta: 0.5 });
    }

    #[test]
    fn from_fps_guards_zero() {
        let mut clock = FixedStepClock::from_fps(0);
        clock.sample();
        assert_eq!(clock.sample().delta, 1.0);
    }

    #[test]
    fn replay_sums_deltas() {
        let mut clock = ReplayClock::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(clock.remaining(), 3);
        let samples: Vec<ClockSample> = std::iter::from_fn(|| clock.next_sample()).collect();
        assert_eq!(
            samples,
            vec![
                ClockSample { elapsed: 1.0, delta: 1.0 },
                ClockSample { elapsed: 3.0, delta: 2.0 },
                ClockSample { elapsed: 6.0, delta: 3.0 },
            ]
        );
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn exhausted_replay_holds_time() {
        let mut clock = ReplayClock::new(vec![0.25]);
        clock.sample();
        let s = clock.sample();
        assert_eq!(s, ClockSample { elapsed: 0.25, delta: 0.0 });
    }

    #[test]
    fn system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let first = clock.sample();
        assert_eq!(first.delta, 0.0);
        let second = clock.sample();
        assert!(second.elapsed >= first.elapsed);
        assert!(second.delta >= 0.0);
    }

    #[test]
    fn clock_trait_is_object_safe() {
        let mut clock: Box<dyn Clock> = Box::new(FixedStepClock::new(0.1));
        clock.sample();
        assert_eq!(clock.sample().delta, 0.1);
    }
}
