//! Information-driven bar sampling for tickbars.
//!
//! This crate provides the core sampling pipeline:
//!
//! - [`resolve_threshold`] - Fixed or auto-calibrated threshold resolution
//! - [`assign_groups`] - Threshold-crossing group assignment
//! - [`aggregate`] - Grouped tick-to-bar reduction
//! - [`BarSampler`] - Orchestrator wiring the three together
//! - [`Bar`] - OHLC bar data structure

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbars/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregate;
mod bar;
mod groups;
mod sampler;
mod threshold;

pub use aggregate::aggregate;
pub use bar::Bar;
pub use groups::assign_groups;
pub use sampler::BarSampler;
pub use threshold::resolve_threshold;
