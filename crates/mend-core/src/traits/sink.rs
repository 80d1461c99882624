use crate::errors::ExportError;
use crate::models::CorrectedSeries;

/// Consumes a corrected series: file export, plot data, reports.
pub trait SeriesSink {
    fn write_series(&mut self, series: &CorrectedSeries) -> Result<(), ExportError>;
}
