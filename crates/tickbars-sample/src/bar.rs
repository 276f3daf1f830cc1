//! OHLC bar data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One aggregated OHLC bar summarizing a contiguous run of ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Timestamp of the last tick in the bar.
    pub timestamp: DateTime<Utc>,
    /// Opening price (first tick's price).
    pub open: f64,
    /// Highest price during the bar.
    pub high: f64,
    /// Lowest price during the bar.
    pub low: f64,
    /// Closing price (last tick's price).
    pub close: f64,
    /// Number of ticks in the bar.
    pub tick_count: u64,
    /// Total traded volume.
    pub volume: f64,
    /// Total traded dollar value.
    pub dollar_value: f64,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        tick_count: u64,
        volume: f64,
        dollar_value: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            tick_count,
            volume,
            dollar_value,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) bar.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Returns the typical price ((high + low + close) / 3).
    #[must_use]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Returns the volume-weighted average price over the bar.
    ///
    /// Falls back to the close when the bar carries no volume.
    #[must_use]
    pub fn vwap(&self) -> f64 {
        if self.volume > 0.0 {
            self.dollar_value / self.volume
        } else {
            self.close
        }
    }
}
