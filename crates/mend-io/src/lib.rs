//! # mend-io
//!
//! Collaborators around the corrector: CSV ingestion into a validated
//! `Series`, CSV export of a `CorrectedSeries`, the correction summary
//! report, and plot-ready visualization data.

pub mod events;
pub mod export;
pub mod ingest;
pub mod report;
pub mod timestamp;

pub use export::CsvExporter;
pub use ingest::CsvSource;
pub use report::{PlotJsonSink, PlotPoint, PlotSeries, SummaryReport};
