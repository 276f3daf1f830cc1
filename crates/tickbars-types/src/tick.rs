//! Trade tick representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single trade tick.
///
/// Ticks are expected to arrive in non-decreasing timestamp order; the
/// sampler processes them strictly in the order given and makes no
/// correctness guarantee under reordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Timestamp of the trade (UTC).
    pub timestamp: DateTime<Utc>,
    /// Trade price (positive).
    pub price: f64,
    /// Traded volume (non-negative).
    pub volume: f64,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, price: f64, volume: f64) -> Self {
        Self {
            timestamp,
            price,
            volume,
        }
    }

    /// Returns the dollar value traded (price * volume).
    #[must_use]
    pub fn dollar_value(&self) -> f64 {
        self.price * self.volume
    }
}
