//! Activity measure selection for bar sampling.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TickbarsError;

/// The activity measure whose cumulative sum triggers bar sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BarType {
    /// One unit per trade: bars close every N ticks.
    #[default]
    Tick,
    /// Traded volume: bars close every N units of volume.
    Volume,
    /// Traded dollar value (price * volume): bars close every N dollars.
    Dollar,
}

impl BarType {
    /// Returns the bar type as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tick => "tick",
            Self::Volume => "volume",
            Self::Dollar => "dollar",
        }
    }

    /// Returns all supported bar types.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Tick, Self::Volume, Self::Dollar]
    }

    /// Returns the per-tick measure value for this bar type.
    #[must_use]
    pub fn measure(&self, price: f64, volume: f64) -> f64 {
        match self {
            Self::Tick => 1.0,
            Self::Volume => volume,
            Self::Dollar => price * volume,
        }
    }
}

impl std::fmt::Display for BarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BarType {
    type Err = TickbarsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tick" | "ticks" => Ok(Self::Tick),
            "volume" | "vol" => Ok(Self::Volume),
            "dollar" | "dollars" => Ok(Self::Dollar),
            _ => Err(TickbarsError::UnsupportedBarType(s.to_string())),
        }
    }
}
