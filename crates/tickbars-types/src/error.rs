//! Error types for tickbars.

use thiserror::Error;

/// Result type alias for tickbars operations.
pub type Result<T> = std::result::Result<T, TickbarsError>;

/// Errors that can occur during bar sampling.
///
/// All variants are fatal: they indicate caller misuse or unusable input, and
/// no partial bar series is ever produced.
#[derive(Error, Debug)]
pub enum TickbarsError {
    /// A configured input column is absent from the table.
    #[error("Missing column '{0}' in input")]
    MissingColumn(String),

    /// The requested bar type is not one of the supported measures.
    #[error("Unsupported bar type '{0}', expected one of: tick, volume, dollar")]
    UnsupportedBarType(String),

    /// A non-positive or undefined threshold, user-supplied or auto-resolved.
    #[error("Invalid threshold {0} (must be a positive, finite number)")]
    InvalidThreshold(f64),

    /// The input has no rows to group.
    #[error("Empty input: no ticks to sample")]
    EmptyInput,

    /// Malformed input data (bad timestamp, number, or row shape).
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O error while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
