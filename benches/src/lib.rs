//! Benchmark utilities for tickbars.

use chrono::{TimeDelta, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tickbars_lib::prelude::*;

/// Generates a deterministic synthetic tick series.
///
/// Prices follow a small random walk around 100 and volumes are drawn
/// uniformly from (0, 10]; the fixed seed keeps benchmark runs comparable.
pub fn synthetic_ticks(count: usize) -> Vec<Tick> {
    let mut rng = StdRng::seed_from_u64(42);
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let mut price = 100.0;
    (0..count)
        .map(|i| {
            price += rng.random_range(-0.05..0.05);
            let volume = rng.random_range(0.1..10.0);
            Tick::new(start + TimeDelta::milliseconds(i as i64 * 250), price, volume)
        })
        .collect()
}

/// Cumulative sum of the chosen activity measure over a tick series.
pub fn cumulative_measure(ticks: &[Tick], bar_type: BarType) -> Vec<f64> {
    let mut sum = 0.0;
    ticks
        .iter()
        .map(|tick| {
            sum += bar_type.measure(tick.price, tick.volume);
            sum
        })
        .collect()
}
