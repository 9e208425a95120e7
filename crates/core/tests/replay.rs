//! End-to-end checks of the public API: construct, drive from a clock, replay.

use skyfx_core::{
    Clock, FixedStepClock, Palette, PaletteTable, ReplayClock, Rgb8, SkyEngine, SkyParams,
};

#[test]
fn replayed_deltas_reproduce_spin_exactly() {
    let deltas = vec![0.016, 0.017, 0.033, 0.016, 0.5, 0.0, 0.016];

    let mut first = SkyEngine::with_defaults();
    let mut clock = ReplayClock::new(deltas.clone());
    let frames_a: Vec<_> = (0..deltas.len()).map(|_| first.advance(&mut clock)).collect();

    let mut second = SkyEngine::with_defaults();
    let mut clock = ReplayClock::new(deltas.clone());
    let frames_b: Vec<_> = (0..deltas.len()).map(|_| second.advance(&mut clock)).collect();

    assert_eq!(frames_a, frames_b);
    let expected = -0.1 * deltas.iter().sum::<f64>();
    assert!((first.spin() - expected).abs() < 1e-12);
}

#[test]
fn spin_depends_on_path_not_just_elapsed_time() {
    // Same final elapsed time (3.0s), different delta histories.
    let mut coarse = SkyEngine::with_defaults();
    coarse.tick(3.0, 3.0);

    let mut fine = SkyEngine::with_defaults();
    fine.tick(1.0, 1.0);
    fine.tick(2.0, 1.0);
    let last = fine.tick(3.0, 0.5);

    assert!((coarse.spin() - -0.3).abs() < 1e-12);
    assert!((last.spin - -0.25).abs() < 1e-12);
}

#[test]
fn colors_stay_within_adjacent_palettes() {
    let mut engine = SkyEngine::with_defaults();
    let table = PaletteTable::builtin();
    let mut clock = FixedStepClock::from_fps(30);

    // 70 seconds covers more than a full sin(0.1·t) period.
    for _ in 0..(30 * 70) {
        let sample = clock.sample();
        let cycle = engine.cycle_at(sample.elapsed);
        let frame = engine.tick(sample.elapsed, sample.delta);
        let from = table.get(cycle.current).unwrap();
        let to = table.get(cycle.next).unwrap();
        for (got, (a, b)) in frame
            .colors()
            .iter()
            .zip(from.colors().iter().zip(to.colors().iter()))
        {
            for ((g, lo), hi) in got
                .channels()
                .iter()
                .zip(a.channels())
                .zip(b.channels())
            {
                assert!(
                    *g >= lo.min(hi) && *g <= lo.max(hi),
                    "channel {g} outside [{lo}, {hi}] at t={}",
                    sample.elapsed
                );
            }
        }
    }
}

#[test]
fn custom_two_palette_table_sweeps_between_endpoints() {
    let black = Palette::new("black", Rgb8::new(0, 0, 0), Rgb8::new(0, 0, 0), Rgb8::new(0, 0, 0));
    let white = Palette::new(
        "white",
        Rgb8::new(255, 255, 255),
        Rgb8::new(255, 255, 255),
        Rgb8::new(255, 255, 255),
    );
    let table = PaletteTable::new(vec![black, white]).unwrap();
    let mut engine = SkyEngine::new(table, SkyParams::default()).unwrap();

    // t = 0: oscillator at 0.5, so the midpoint gray
    assert_eq!(engine.tick(0.0, 0.0).primary, Rgb8::new(128, 128, 128));
}

#[test]
fn json_frame_output_is_stable() {
    let mut engine = SkyEngine::with_defaults();
    let frame = engine.tick(0.0, 0.0);
    let v = serde_json::to_value(frame).unwrap();
    assert_eq!(v["primary"], "#9370db");
    assert_eq!(v["secondary"], "#8a2be2");
    assert_eq!(v["accent"], "#4b0082");
    assert_eq!(v["yaw"], 0.25);
    assert_eq!(v["pitch"], 0.0);
}
