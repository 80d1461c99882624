//! Summary report and visualization data.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use mend_core::{CorrectedSeries, ExportError, ScoreBasis, SeriesSink, Timestamp};

/// Counts shown to an operator after a correction run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub total: usize,
    pub outliers: usize,
    pub missing_original: usize,
    pub missing_after_correction: usize,
    pub filled: usize,
    pub threshold: f64,
    pub basis: ScoreBasis,
}

impl SummaryReport {
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(json_error)
    }
}

impl From<&CorrectedSeries> for SummaryReport {
    fn from(series: &CorrectedSeries) -> Self {
        let summary = series.summary();
        Self {
            total: summary.total,
            outliers: summary.outliers,
            missing_original: summary.missing_original,
            missing_after_correction: summary.missing_after_correction,
            filled: summary.filled,
            threshold: series.threshold(),
            basis: *series.basis(),
        }
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correction Summary")?;
        writeln!(f, "- Number of outliers: {}", self.outliers)?;
        writeln!(f, "- Missing values (original): {}", self.missing_original)?;
        write!(f, "- Missing after correction: {}", self.missing_after_correction)
    }
}

/// One point of the raw/corrected overlay chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub timestamp: Timestamp,
    pub raw: Option<f64>,
    pub corrected: Option<f64>,
    pub is_outlier: bool,
}

/// Plot-ready data: raw and corrected lines plus outlier markers.
/// Rendering is left to whatever consumes the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    pub threshold: f64,
    pub points: Vec<PlotPoint>,
}

impl PlotSeries {
    /// Points to mark as outliers, with their raw readings.
    pub fn outliers(&self) -> impl Iterator<Item = &PlotPoint> {
        self.points.iter().filter(|p| p.is_outlier)
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(json_error)
    }
}

impl From<&CorrectedSeries> for PlotSeries {
    fn from(series: &CorrectedSeries) -> Self {
        let points = series
            .iter()
            .map(|r| PlotPoint {
                timestamp: r.timestamp,
                raw: r.raw_value,
                corrected: r.corrected_value,
                is_outlier: r.is_outlier,
            })
            .collect();
        Self {
            threshold: series.threshold(),
            points,
        }
    }
}

/// Writes [`PlotSeries`] JSON for each series it receives.
pub struct PlotJsonSink<W: io::Write> {
    writer: W,
}

impl<W: io::Write> PlotJsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> SeriesSink for PlotJsonSink<W> {
    fn write_series(&mut self, series: &CorrectedSeries) -> Result<(), ExportError> {
        let plot = PlotSeries::from(series);
        serde_json::to_writer_pretty(&mut self.writer, &plot).map_err(json_error)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn json_error(e: serde_json::Error) -> ExportError {
    ExportError::Json {
        message: e.to_string(),
    }
}
