//! Core types for tickbars information-driven bar sampling.
//!
//! This crate provides the fundamental data structures used throughout
//! tickbars:
//!
//! - [`Tick`] - A single trade with timestamp, price, and volume
//! - [`BarType`] - The activity measure that triggers sampling
//! - [`Threshold`] - Fixed or auto-calibrated sampling threshold
//! - [`ColumnSpec`] - Configurable input column names

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbars/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar_type;
mod columns;
mod error;
mod threshold;
mod tick;

pub use bar_type::BarType;
pub use columns::ColumnSpec;
pub use error::{Result, TickbarsError};
pub use threshold::{AutoThreshold, DEFAULT_AUTO_RATIO, DEFAULT_ROUNDING, Threshold};
pub use tick::Tick;
