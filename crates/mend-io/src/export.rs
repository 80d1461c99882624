//! CSV export of a corrected series.
//!
//! Header is `<timestamp>,<value>,corrected_value`, using the ingest
//! column names so a corrected file can be fed straight back in. Missing
//! values are empty cells. Floats use the shortest representation that
//! re-parses to the same bits.

use std::fs::File;
use std::io;
use std::path::Path;

use mend_core::config::{ExportConfig, IngestConfig};
use mend_core::constants::{CORRECTED_VALUE_COLUMN, OUTLIER_COLUMN, SCORE_COLUMN};
use mend_core::{AnnotatedRecord, CorrectedSeries, ExportError, SeriesSink};

use crate::events;

/// A [`SeriesSink`] writing CSV rows to any byte sink.
pub struct CsvExporter<W: io::Write> {
    writer: csv::Writer<W>,
    timestamp_column: String,
    value_column: String,
    include_annotations: bool,
    target: String,
}

impl CsvExporter<File> {
    /// Create (or truncate) `path`.
    pub fn create(
        path: &Path,
        export: &ExportConfig,
        ingest: &IngestConfig,
    ) -> Result<Self, ExportError> {
        let file = File::create(path).map_err(|e| ExportError::Io {
            message: format!("{}: {e}", path.display()),
        })?;
        Ok(Self::with_target(file, export, ingest, path.display().to_string()))
    }
}

impl<W: io::Write> CsvExporter<W> {
    pub fn new(writer: W, export: &ExportConfig, ingest: &IngestConfig) -> Self {
        Self::with_target(writer, export, ingest, "<writer>".to_string())
    }

    fn with_target(writer: W, export: &ExportConfig, ingest: &IngestConfig, target: String) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(export.effective_delimiter() as u8)
            .from_writer(writer);
        Self {
            writer,
            timestamp_column: ingest.effective_timestamp_column().to_string(),
            value_column: ingest.effective_value_column().to_string(),
            include_annotations: export.effective_include_annotations(),
            target,
        }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W, ExportError> {
        self.writer.into_inner().map_err(|e| ExportError::Io {
            message: e.to_string(),
        })
    }

    fn header(&self) -> Vec<String> {
        let mut header = vec![
            self.timestamp_column.clone(),
            self.value_column.clone(),
            CORRECTED_VALUE_COLUMN.to_string(),
        ];
        if self.include_annotations {
            header.push(SCORE_COLUMN.to_string());
            header.push(OUTLIER_COLUMN.to_string());
        }
        header
    }

    fn row(&self, record: &AnnotatedRecord) -> Vec<String> {
        let mut row = vec![
            record.timestamp.to_string(),
            format_cell(record.raw_value),
            format_cell(record.corrected_value),
        ];
        if self.include_annotations {
            row.push(format_cell(record.score));
            row.push(record.is_outlier.to_string());
        }
        row
    }
}

impl<W: io::Write> SeriesSink for CsvExporter<W> {
    fn write_series(&mut self, series: &CorrectedSeries) -> Result<(), ExportError> {
        let header = self.header();
        self.writer.write_record(&header).map_err(csv_error)?;
        for record in series {
            let row = self.row(record);
            self.writer.write_record(&row).map_err(csv_error)?;
        }
        self.writer.flush()?;

        events::series_exported(&self.target, series.len(), self.include_annotations);
        Ok(())
    }
}

fn format_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn csv_error(e: csv::Error) -> ExportError {
    ExportError::Csv {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells() {
        assert_eq!(format_cell(None), "");
        assert_eq!(format_cell(Some(10.0)), "10");
        assert_eq!(format_cell(Some(0.1)), "0.1");
        assert_eq!(format_cell(Some(-2.5e-7)), "-0.00000025");
    }
}
