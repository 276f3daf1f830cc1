//! Input column name configuration.

use serde::{Deserialize, Serialize};

/// Column names for the tabular tick input.
///
/// Input tables are not required to use fixed identifiers; the reader looks
/// up each required column by the name configured here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Name of the timestamp column.
    pub timestamp: String,
    /// Name of the price column.
    pub price: String,
    /// Name of the volume column.
    pub volume: String,
}

impl ColumnSpec {
    /// Creates a column spec with the given names.
    #[must_use]
    pub fn new(
        timestamp: impl Into<String>,
        price: impl Into<String>,
        volume: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            price: price.into(),
            volume: volume.into(),
        }
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::new("timestamp", "price", "volume")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let spec = ColumnSpec::default();
        assert_eq!(spec.timestamp, "timestamp");
        assert_eq!(spec.price, "price");
        assert_eq!(spec.volume, "volume");
    }

    #[test]
    fn test_custom_names() {
        let spec = ColumnSpec::new("date_time", "px", "qty");
        assert_eq!(spec.timestamp, "date_time");
        assert_eq!(spec.price, "px");
        assert_eq!(spec.volume, "qty");
    }
}
