//! Tabular input and output for tickbars.
//!
//! This crate provides the tabular collaborators around the sampling core:
//!
//! - [`TickReader`] - CSV tick input with configurable column names
//! - [`CsvFormatter`] - CSV output format
//! - [`JsonFormatter`] - JSON array or NDJSON output format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbars/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod reader;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use reader::TickReader;
