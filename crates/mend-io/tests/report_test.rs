//! Summary report and plot data.

use chrono::NaiveDate;
use mend_core::{CorrectedSeries, Record, Series, SeriesSink, Timestamp};
use mend_correction::CorrectionEngine;
use mend_io::{PlotJsonSink, PlotSeries, SummaryReport};

fn corrected(values: &[Option<f64>]) -> CorrectedSeries {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let records = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let ts: Timestamp = (start + chrono::Duration::minutes(i as i64)).into();
            Record::new(ts, v)
        })
        .collect();
    CorrectionEngine::new().correct(&Series::new(records).unwrap())
}

/// Leading gap, a spike well past 3 sigma, and a mid-series gap.
fn spiky() -> CorrectedSeries {
    let mut values = vec![None, Some(10.0), Some(10.0), Some(100.0)];
    values.extend((0..16).map(|i| if i == 5 { None } else { Some(10.0) }));
    corrected(&values)
}

#[test]
fn test_summary_text() {
    let report = SummaryReport::from(&spiky());
    assert_eq!(
        report.to_string(),
        "Correction Summary\n\
         - Number of outliers: 1\n\
         - Missing values (original): 2\n\
         - Missing after correction: 1"
    );
    assert_eq!(report.total, 20);
    assert_eq!(report.filled, 2);
}

#[test]
fn test_summary_json_carries_basis() {
    let json = SummaryReport::from(&spiky()).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["outliers"], 1);
    assert_eq!(value["missing_after_correction"], 1);
    assert_eq!(value["threshold"], 3.0);
    assert_eq!(value["basis"]["kind"], "measured");
    assert_eq!(value["basis"]["convention"], "population");
}

#[test]
fn test_degenerate_summary_has_no_outliers() {
    let report = SummaryReport::from(&corrected(&[Some(7.0); 4]));
    assert_eq!(report.outliers, 0);
    assert_eq!(report.missing_after_correction, 0);
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["basis"]["kind"], "degenerate");
}

#[test]
fn test_plot_series_mirrors_records() {
    let series = spiky();
    let plot = PlotSeries::from(&series);
    assert_eq!(plot.points.len(), series.len());
    assert_eq!(plot.points[0].raw, None);
    assert_eq!(plot.points[0].corrected, None);

    let outliers: Vec<_> = plot.outliers().collect();
    assert_eq!(outliers.len(), 1);
    assert_eq!(outliers[0].raw, Some(100.0));
    assert_eq!(outliers[0].corrected, Some(10.0));
}

#[test]
fn test_plot_sink_writes_readable_json() {
    let series = spiky();
    let mut sink = PlotJsonSink::new(Vec::new());
    sink.write_series(&series).unwrap();
    let bytes = sink.into_inner();

    let parsed: PlotSeries = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, PlotSeries::from(&series));
}
