//! Information-driven OHLC bar sampling from trade ticks.
//!
//! This is a facade crate that re-exports functionality from the tickbars
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use tickbars_lib::prelude::*;
//! use chrono::{TimeDelta, TimeZone, Utc};
//!
//! fn main() -> Result<()> {
//!     let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
//!     let ticks: Vec<Tick> = (0..10)
//!         .map(|i| Tick::new(start + TimeDelta::seconds(i), 100.0 + i as f64, 1.0))
//!         .collect();
//!
//!     let sampler = BarSampler::new(BarType::Tick, Threshold::Fixed(4.0));
//!     let bars = sampler.sample(&ticks)?;
//!
//!     // 4 ticks per bar, trailing partial bar of 2 ticks.
//!     assert_eq!(bars.len(), 3);
//!     assert_eq!(bars[2].tick_count, 2);
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbars/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tickbars_types::*;

// Re-export the sampling core
#[cfg(feature = "sample")]
pub use tickbars_sample::{Bar, BarSampler, aggregate, assign_groups, resolve_threshold};

// Re-export tabular input/output
#[cfg(feature = "format")]
pub use tickbars_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, TickReader,
};

/// Prelude module for convenient imports.
///
/// ```
/// use tickbars_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tickbars_types::{
        AutoThreshold, BarType, ColumnSpec, Result, Threshold, Tick, TickbarsError,
    };

    #[cfg(feature = "sample")]
    pub use tickbars_sample::{Bar, BarSampler};

    #[cfg(feature = "format")]
    pub use tickbars_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, TickReader,
    };
}
