//! Sampling threshold specification.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TickbarsError;

/// Default rounding magnitude for auto thresholds (nearest hundred).
pub const DEFAULT_ROUNDING: i32 = -2;

/// Default ratio of mean daily activity for auto thresholds (1/50).
pub const DEFAULT_AUTO_RATIO: f64 = 0.02;

/// Parameters for automatic threshold calibration.
///
/// The threshold is calibrated as `ratio` times the mean daily total of the
/// chosen activity measure, rounded to the power-of-ten magnitude given by
/// `rounding` (e.g. -2 rounds to the nearest hundred).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoThreshold {
    /// Power-of-ten rounding exponent applied to the calibrated value.
    pub rounding: i32,
    /// Fraction of mean daily activity used as the threshold.
    pub ratio: f64,
}

impl AutoThreshold {
    /// Creates auto-calibration parameters.
    #[must_use]
    pub const fn new(rounding: i32, ratio: f64) -> Self {
        Self { rounding, ratio }
    }
}

impl Default for AutoThreshold {
    fn default() -> Self {
        Self {
            rounding: DEFAULT_ROUNDING,
            ratio: DEFAULT_AUTO_RATIO,
        }
    }
}

/// How the sampling threshold is determined.
///
/// The original formulation mixed a `"auto"` string sentinel with numeric
/// thresholds in one field; the tagged variants make that distinction
/// explicit at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Threshold {
    /// A user-supplied threshold (must be positive).
    Fixed(f64),
    /// Calibrated from the input's mean daily activity.
    Auto(AutoThreshold),
}

impl Threshold {
    /// Creates an auto threshold with default calibration parameters.
    #[must_use]
    pub fn auto() -> Self {
        Self::Auto(AutoThreshold::default())
    }

    /// Returns true if this threshold is auto-calibrated.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto(_))
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::auto()
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(value) => write!(f, "{value}"),
            Self::Auto(_) => write!(f, "auto"),
        }
    }
}

impl FromStr for Threshold {
    type Err = TickbarsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::auto());
        }
        let value: f64 = s
            .parse()
            .map_err(|_| TickbarsError::Parse(format!("invalid threshold '{s}'")))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(TickbarsError::InvalidThreshold(value));
        }
        Ok(Self::Fixed(value))
    }
}
