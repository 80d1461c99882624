//! CSV ingestion.
//!
//! Reads a headered CSV, locates the timestamp and reading columns by
//! name, and produces a validated [`Series`]. Rows are reported by the
//! line a record starts on, so the header is row 1 and a quoted field
//! spanning lines pushes later rows down accordingly.

use std::fs::File;
use std::io;
use std::path::Path;

use mend_core::config::IngestConfig;
use mend_core::{InputError, Record, RecordSource, Series};

use crate::events;
use crate::timestamp;

/// Line of the first data row when the header is a single line.
const FIRST_DATA_ROW: usize = 2;

/// A [`RecordSource`] over any CSV byte stream.
pub struct CsvSource<R: io::Read> {
    reader: csv::Reader<R>,
    config: IngestConfig,
    origin: String,
}

impl CsvSource<File> {
    /// Open `path` for reading.
    pub fn from_path(path: &Path, config: &IngestConfig) -> Result<Self, InputError> {
        let file = File::open(path).map_err(|e| InputError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::with_origin(file, config, path.display().to_string()))
    }
}

impl<R: io::Read> CsvSource<R> {
    pub fn from_reader(reader: R, config: &IngestConfig) -> Self {
        Self::with_origin(reader, config, "<reader>".to_string())
    }

    fn with_origin(reader: R, config: &IngestConfig, origin: String) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(config.effective_delimiter() as u8)
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self {
            reader,
            config: config.clone(),
            origin,
        }
    }

    /// Column positions of (timestamp, value) in the header.
    fn locate_columns(&mut self) -> Result<(usize, usize), InputError> {
        let headers = self.reader.headers().map_err(csv_error)?.clone();
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| InputError::MissingColumn {
                    column: name.to_string(),
                })
        };
        let ts_idx = position(self.config.effective_timestamp_column())?;
        let value_idx = position(self.config.effective_value_column())?;
        Ok((ts_idx, value_idx))
    }

    fn parse_value(&self, row: usize, cell: &str) -> Result<Option<f64>, InputError> {
        if self.config.is_missing_marker(cell) {
            return Ok(None);
        }
        match cell.parse::<f64>() {
            Ok(v) if v.is_nan() => Ok(None),
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(InputError::InvalidValue {
                row,
                value: cell.to_string(),
            }),
        }
    }

    fn read_records(&mut self) -> Result<Vec<Record>, InputError> {
        let (ts_idx, value_idx) = self.locate_columns()?;
        let format = self.config.timestamp_format.clone();

        let mut records: Vec<Record> = Vec::new();
        let mut row_buf = csv::StringRecord::new();
        while self.reader.read_record(&mut row_buf).map_err(csv_error)? {
            let row = row_buf
                .position()
                .map_or(FIRST_DATA_ROW + records.len(), |p| p.line() as usize);
            let ts_cell = row_buf.get(ts_idx).unwrap_or("");
            let timestamp = timestamp::parse(ts_cell, format.as_deref()).ok_or_else(|| {
                events::row_rejected(&self.origin, row, "timestamp");
                InputError::InvalidTimestamp {
                    row,
                    value: ts_cell.to_string(),
                }
            })?;

            let value_cell = row_buf.get(value_idx).unwrap_or("");
            let value = self.parse_value(row, value_cell).inspect_err(|_| {
                events::row_rejected(&self.origin, row, "value");
            })?;

            records.push(Record::new(timestamp, value));
        }
        Ok(records)
    }
}

impl<R: io::Read> RecordSource for CsvSource<R> {
    fn read_series(&mut self) -> Result<Series, InputError> {
        let records = self.read_records()?;

        let in_order = records
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp);
        let series = if !in_order && self.config.effective_sort_unordered() {
            events::rows_reordered(&self.origin, records.len());
            Series::sorted(records)?
        } else {
            Series::new(records)?
        };

        events::series_ingested(&self.origin, series.len(), series.missing_count());
        Ok(series)
    }
}

fn csv_error(e: csv::Error) -> InputError {
    InputError::Csv {
        message: e.to_string(),
    }
}
