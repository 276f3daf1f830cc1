//! Tabular tick input.

use std::fs::File;
use std::io::Read;
use std::path::Path;

// Global path: `crate::csv` is the formatter module, `::csv` the parser crate.
use ::csv::StringRecord;
use chrono::{DateTime, NaiveDateTime, Utc};
use tickbars_types::{ColumnSpec, Result, Tick, TickbarsError};

/// Reads ticks from a CSV table with configurable column names.
///
/// The table must expose the three columns named in the [`ColumnSpec`]:
/// an ordered timestamp column, a positive price column, and a non-negative
/// volume column. Any other columns are ignored.
#[derive(Debug, Clone, Default)]
pub struct TickReader {
    columns: ColumnSpec,
}

impl TickReader {
    /// Creates a reader expecting the default column names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader for the given column names.
    #[must_use]
    pub const fn with_columns(columns: ColumnSpec) -> Self {
        Self { columns }
    }

    /// Reads all ticks from a CSV source.
    ///
    /// # Errors
    ///
    /// Returns [`TickbarsError::MissingColumn`] when a configured column is
    /// absent from the header, and [`TickbarsError::Parse`] for malformed
    /// rows, non-positive prices, negative volumes, or out-of-order
    /// timestamps.
    pub fn read<R: Read>(&self, source: R) -> Result<Vec<Tick>> {
        let mut reader = ::csv::Reader::from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| TickbarsError::Parse(e.to_string()))?
            .clone();
        let timestamp_idx = column_index(&headers, &self.columns.timestamp)?;
        let price_idx = column_index(&headers, &self.columns.price)?;
        let volume_idx = column_index(&headers, &self.columns.volume)?;

        let mut ticks = Vec::new();
        let mut previous: Option<DateTime<Utc>> = None;

        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| TickbarsError::Parse(e.to_string()))?;

            let timestamp = parse_timestamp(field(&record, timestamp_idx, row)?)?;
            let price = parse_number(field(&record, price_idx, row)?, row, &self.columns.price)?;
            let volume = parse_number(field(&record, volume_idx, row)?, row, &self.columns.volume)?;

            if price <= 0.0 {
                return Err(TickbarsError::Parse(format!(
                    "row {row}: price must be positive, got {price}"
                )));
            }
            if volume < 0.0 {
                return Err(TickbarsError::Parse(format!(
                    "row {row}: volume must be non-negative, got {volume}"
                )));
            }
            if let Some(prev) = previous
                && timestamp < prev
            {
                return Err(TickbarsError::Parse(format!(
                    "row {row}: timestamps must be non-decreasing"
                )));
            }
            previous = Some(timestamp);

            ticks.push(Tick::new(timestamp, price, volume));
        }

        Ok(ticks)
    }

    /// Reads all ticks from a CSV file.
    ///
    /// # Errors
    ///
    /// As [`read`](Self::read), plus [`TickbarsError::Io`] when the file
    /// cannot be opened.
    pub fn read_path(&self, path: &Path) -> Result<Vec<Tick>> {
        let file = File::open(path)?;
        self.read(file)
    }
}

/// Looks up a configured column in the header row.
fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| TickbarsError::MissingColumn(name.to_string()))
}

fn field<'a>(record: &'a StringRecord, index: usize, row: usize) -> Result<&'a str> {
    record
        .get(index)
        .ok_or_else(|| TickbarsError::Parse(format!("row {row}: too few fields")))
}

fn parse_number(value: &str, row: usize, column: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| TickbarsError::Parse(format!("row {row}: invalid {column} '{value}'")))
}

/// Parses a timestamp as RFC 3339 or naive `YYYY-MM-DD HH:MM:SS[.fff]`
/// (assumed UTC).
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    Err(TickbarsError::Parse(format!(
        "invalid timestamp '{value}', expected RFC 3339 or YYYY-MM-DD HH:MM:SS"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_read_default_columns() {
        let data = "timestamp,price,volume\n\
                    2024-01-15T12:30:45Z,100.5,2.0\n\
                    2024-01-15T12:30:46Z,101.0,1.5\n";
        let ticks = TickReader::new().read(data.as_bytes()).unwrap();

        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[0].price, 100.5);
        assert_eq!(ticks[1].volume, 1.5);
    }

    #[test]
    fn test_read_custom_columns_ignores_extras() {
        let data = "date_time,side,px,qty\n\
                    2024-01-15 12:30:45.250,buy,100.5,2\n";
        let reader = TickReader::with_columns(ColumnSpec::new("date_time", "px", "qty"));
        let ticks = reader.read(data.as_bytes()).unwrap();

        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].timestamp.second(), 45);
        assert_eq!(ticks[0].price, 100.5);
    }

    #[test]
    fn test_missing_column() {
        let data = "timestamp,price\n2024-01-15T12:30:45Z,100.5\n";
        let err = TickReader::new().read(data.as_bytes()).unwrap_err();
        assert!(matches!(err, TickbarsError::MissingColumn(col) if col == "volume"));
    }

    #[test]
    fn test_bad_price_rejected() {
        let data = "timestamp,price,volume\n2024-01-15T12:30:45Z,-1.0,2.0\n";
        let err = TickReader::new().read(data.as_bytes()).unwrap_err();
        assert!(matches!(err, TickbarsError::Parse(_)));
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let data = "timestamp,price,volume\nyesterday,100.0,2.0\n";
        let err = TickReader::new().read(data.as_bytes()).unwrap_err();
        assert!(matches!(err, TickbarsError::Parse(msg) if msg.contains("timestamp")));
    }

    #[test]
    fn test_out_of_order_timestamps_rejected() {
        let data = "timestamp,price,volume\n\
                    2024-01-15T12:30:46Z,100.5,2.0\n\
                    2024-01-15T12:30:45Z,101.0,1.5\n";
        let err = TickReader::new().read(data.as_bytes()).unwrap_err();
        assert!(matches!(err, TickbarsError::Parse(msg) if msg.contains("non-decreasing")));
    }

    #[test]
    fn test_empty_table_is_ok_here() {
        // An empty tick list is the sampler's EmptyInput to reject, not the
        // reader's.
        let data = "timestamp,price,volume\n";
        let ticks = TickReader::new().read(data.as_bytes()).unwrap();
        assert!(ticks.is_empty());
    }
}
