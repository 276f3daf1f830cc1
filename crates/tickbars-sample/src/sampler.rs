//! Bar sampling orchestration.

use tickbars_types::{BarType, Result, Threshold, Tick, TickbarsError};

use crate::{Bar, aggregate, assign_groups, resolve_threshold};

/// Samples OHLC bars from a tick series by accumulated activity.
///
/// A new bar is emitted whenever the cumulative activity measure (tick
/// count, volume, or dollar value) reaches the configured threshold, rather
/// than on wall-clock boundaries. Sampling is a pure function of the input:
/// the sampler holds no mutable state, so independent samples may run
/// concurrently over the same tick slice.
#[derive(Debug, Clone, Copy)]
pub struct BarSampler {
    bar_type: BarType,
    threshold: Threshold,
}

impl BarSampler {
    /// Creates a sampler for the given measure and threshold specification.
    #[must_use]
    pub const fn new(bar_type: BarType, threshold: Threshold) -> Self {
        Self {
            bar_type,
            threshold,
        }
    }

    /// Returns the activity measure being sampled on.
    #[must_use]
    pub const fn bar_type(&self) -> BarType {
        self.bar_type
    }

    /// Returns the threshold specification.
    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Samples the tick series into bars.
    ///
    /// Ticks must be ordered by non-decreasing timestamp. The final bar may
    /// be partial: rows after the last threshold crossing are kept as one
    /// trailing bar rather than dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TickbarsError::EmptyInput`] for an empty slice and
    /// [`TickbarsError::InvalidThreshold`] when the fixed or auto-resolved
    /// threshold is not a positive, finite number.
    pub fn sample(&self, ticks: &[Tick]) -> Result<Vec<Bar>> {
        if ticks.is_empty() {
            return Err(TickbarsError::EmptyInput);
        }

        let threshold = resolve_threshold(ticks, self.bar_type, &self.threshold)?;
        let cumulative = cumulative_measure(ticks, self.bar_type);
        let groups = assign_groups(&cumulative, threshold)?;

        Ok(aggregate(ticks, &groups))
    }
}

/// Running cumulative sum of the chosen activity measure.
fn cumulative_measure(ticks: &[Tick], bar_type: BarType) -> Vec<f64> {
    let mut sum = 0.0;
    ticks
        .iter()
        .map(|tick| {
            sum += bar_type.measure(tick.price, tick.volume);
            sum
        })
        .collect()
}
