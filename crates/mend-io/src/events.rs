//! Structured log events for ingestion and export.

/// Log a successfully ingested series.
pub fn series_ingested(source: &str, records: usize, missing: usize) {
    tracing::info!(
        event = "series_ingested",
        source = %source,
        records = records,
        missing = missing,
        "series ingested"
    );
}

/// Log that out-of-order rows were reordered before validation.
pub fn rows_reordered(source: &str, records: usize) {
    tracing::warn!(
        event = "rows_reordered",
        source = %source,
        records = records,
        "input rows were not in time order and have been sorted"
    );
}

/// Log a rejected row.
pub fn row_rejected(source: &str, row: usize, reason: &str) {
    tracing::debug!(
        event = "row_rejected",
        source = %source,
        row = row,
        reason = %reason,
        "row rejected"
    );
}

/// Log a completed export.
pub fn series_exported(target: &str, records: usize, annotated: bool) {
    tracing::info!(
        event = "series_exported",
        target = %target,
        records = records,
        annotated = annotated,
        "series exported"
    );
}
