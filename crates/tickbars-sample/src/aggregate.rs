//! Grouped tick-to-bar reduction.

use tickbars_types::Tick;

use crate::Bar;

/// Reduces grouped ticks into one OHLC bar per group.
///
/// `groups` must hold contiguous, non-decreasing ids as produced by
/// [`assign_groups`](crate::assign_groups); bars are returned in ascending
/// group-id order, which is also ascending time.
///
/// # Panics
///
/// Panics if `ticks` and `groups` have different lengths.
#[must_use]
pub fn aggregate(ticks: &[Tick], groups: &[usize]) -> Vec<Bar> {
    assert_eq!(
        ticks.len(),
        groups.len(),
        "ticks and groups must be the same length"
    );

    let mut bars = Vec::new();
    let mut rows = ticks.iter().zip(groups.iter());

    let Some((first, &first_group)) = rows.next() else {
        return bars;
    };

    let mut current_group = first_group;
    let mut builder = BarBuilder::new(first);

    for (tick, &group) in rows {
        if group == current_group {
            builder.update(tick);
        } else {
            bars.push(builder.finish());
            builder = BarBuilder::new(tick);
            current_group = group;
        }
    }
    bars.push(builder.finish());

    bars
}

/// Builder for OHLC bars.
#[derive(Debug)]
struct BarBuilder {
    timestamp: chrono::DateTime<chrono::Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    tick_count: u64,
    volume: f64,
    dollar_value: f64,
}

impl BarBuilder {
    /// Creates a new builder from the group's first tick.
    fn new(tick: &Tick) -> Self {
        Self {
            timestamp: tick.timestamp,
            open: tick.price,
            high: tick.price,
            low: tick.price,
            close: tick.price,
            tick_count: 1,
            volume: tick.volume,
            dollar_value: tick.dollar_value(),
        }
    }

    /// Updates the builder with the next tick in the group.
    fn update(&mut self, tick: &Tick) {
        self.timestamp = tick.timestamp;
        self.high = self.high.max(tick.price);
        self.low = self.low.min(tick.price);
        self.close = tick.price;
        self.tick_count += 1;
        self.volume += tick.volume;
        self.dollar_value += tick.dollar_value();
    }

    /// Finishes building and returns the bar.
    const fn finish(self) -> Bar {
        Bar::new(
            self.timestamp,
            self.open,
            self.high,
            self.low,
            self.close,
            self.tick_count,
            self.volume,
            self.dollar_value,
        )
    }
}
