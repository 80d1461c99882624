use chrono::{Duration, NaiveDate};
use mend_core::config::CorrectionConfig;
use mend_core::{DegenerateReason, Record, ScoreBasis, Series, StdDevConvention, Timestamp};
use mend_correction::{correct, CorrectionEngine};

fn series(values: &[Option<f64>]) -> Series {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let records = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let ts: Timestamp = (start + Duration::minutes(i as i64)).into();
            Record::new(ts, v)
        })
        .collect();
    Series::new(records).unwrap()
}

fn present(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

// ── Spike among a flat baseline ─────────────────────────────────────────

#[test]
fn test_spike_is_flagged_and_replaced_by_preceding_value() {
    // A flat baseline long enough for a single spike to clear 3σ.
    let mut values = vec![10.0; 20];
    values[4] = 100.0;
    let out = correct(&series(&present(&values)));

    assert_eq!(out.outlier_indices(), vec![4]);
    assert_eq!(out.records()[4].corrected_value, Some(10.0));
    assert!(out.records()[4].score.unwrap() > 3.0);
    assert_eq!(out.summary().outliers, 1);
}

#[test]
fn test_short_spike_sample_cannot_reach_the_threshold() {
    // Seven points: the spike's population z-score is sqrt(6) ≈ 2.449,
    // below 3, so nothing is flagged.
    let out = correct(&series(&present(&[10.0, 10.0, 10.0, 10.0, 100.0, 10.0, 10.0])));
    assert!(out.outlier_indices().is_empty());
    assert_eq!(out.corrected_values(), present(&[10.0, 10.0, 10.0, 10.0, 100.0, 10.0, 10.0]));
}

// ── Leading gap ─────────────────────────────────────────────────────────

#[test]
fn test_leading_missing_values_stay_missing() {
    let out = correct(&series(&[None, None, Some(5.0), Some(5.0), Some(5.0)]));

    assert_eq!(
        out.corrected_values(),
        vec![None, None, Some(5.0), Some(5.0), Some(5.0)]
    );
    let summary = out.summary();
    assert_eq!(summary.missing_original, 2);
    assert_eq!(summary.missing_after_correction, 2);
    assert_eq!(summary.outliers, 0);
}

#[test]
fn test_leading_outlier_is_not_back_filled() {
    let mut values = vec![Some(10.0); 20];
    values[0] = Some(500.0);
    values[1] = None;
    let out = correct(&series(&values));

    assert!(out.records()[0].is_outlier);
    assert_eq!(out.records()[0].corrected_value, None);
    assert_eq!(out.records()[1].corrected_value, None);
    assert_eq!(out.records()[2].corrected_value, Some(10.0));
    assert_eq!(out.summary().missing_after_correction, 2);
}

// ── Degenerate samples ──────────────────────────────────────────────────

#[test]
fn test_zero_variance_sample_flags_nothing() {
    let out = correct(&series(&present(&[7.0, 7.0, 7.0, 7.0])));

    assert!(out.outlier_indices().is_empty());
    assert_eq!(out.corrected_values(), present(&[7.0, 7.0, 7.0, 7.0]));
    assert!(out.records().iter().all(|r| r.score.is_none()));
    assert_eq!(
        *out.basis(),
        ScoreBasis::Degenerate {
            reason: DegenerateReason::ZeroVariance { present: 4 }
        }
    );
}

#[test]
fn test_single_present_value_flags_nothing() {
    let out = correct(&series(&[None, Some(3.0), None]));

    assert!(out.outlier_indices().is_empty());
    assert_eq!(out.corrected_values(), vec![None, Some(3.0), Some(3.0)]);
    assert_eq!(
        *out.basis(),
        ScoreBasis::Degenerate {
            reason: DegenerateReason::TooFewValues { present: 1 }
        }
    );
}

#[test]
fn test_all_missing_series_stays_missing() {
    let out = correct(&series(&[None, None, None]));
    assert_eq!(out.corrected_values(), vec![None, None, None]);
    assert_eq!(out.summary().missing_after_correction, 3);
}

// ── Runs of outliers ────────────────────────────────────────────────────

#[test]
fn test_outlier_run_is_flat_lined_to_the_last_good_value() {
    // [5, 200, 200, 6] followed by a 5/6 baseline long enough to
    // make the pair of 200s extreme.
    let mut values = vec![5.0, 200.0, 200.0, 6.0];
    values.extend((0..36).map(|i| if i % 2 == 0 { 5.0 } else { 6.0 }));
    let out = correct(&series(&present(&values)));

    assert_eq!(out.outlier_indices(), vec![1, 2]);
    assert_eq!(out.records()[1].corrected_value, Some(5.0));
    assert_eq!(out.records()[2].corrected_value, Some(5.0));
    assert_eq!(out.records()[3].corrected_value, Some(6.0));
}

#[test]
fn test_tiny_sample_with_large_pair_is_not_flagged() {
    // Four points put a hard ceiling of sqrt(3) on any population z-score.
    let out = correct(&series(&present(&[5.0, 200.0, 200.0, 6.0])));
    assert!(out.outlier_indices().is_empty());
}

// ── Configuration ───────────────────────────────────────────────────────

#[test]
fn test_lower_threshold_flags_more() {
    let values = present(&[10.0, 10.0, 10.0, 10.0, 100.0, 10.0, 10.0]);
    let out = CorrectionEngine::with_threshold(2.0).correct(&series(&values));
    assert_eq!(out.outlier_indices(), vec![4]);
    assert_eq!(out.records()[4].corrected_value, Some(10.0));
    assert_eq!(out.threshold(), 2.0);
}

#[test]
fn test_sample_convention_shrinks_scores() {
    let mut values = vec![10.0; 20];
    values[4] = 100.0;
    let s = series(&present(&values));

    let population = CorrectionEngine::new().correct(&s);
    let sample = CorrectionEngine::new()
        .with_convention(StdDevConvention::Sample)
        .correct(&s);

    let pop_score = population.records()[4].score.unwrap();
    let sample_score = sample.records()[4].score.unwrap();
    assert!(sample_score < pop_score);
    assert!(matches!(
        sample.basis(),
        ScoreBasis::Measured {
            convention: StdDevConvention::Sample,
            ..
        }
    ));
}

#[test]
fn test_engine_from_config_uses_effective_values() {
    let engine = CorrectionEngine::from_config(&CorrectionConfig::default());
    assert_eq!(engine.threshold(), 3.0);
    assert_eq!(engine.convention(), StdDevConvention::Population);

    let engine = CorrectionEngine::from_config(&CorrectionConfig {
        threshold: Some(2.5),
        std_dev: Some(StdDevConvention::Sample),
    });
    assert_eq!(engine.threshold(), 2.5);
    assert_eq!(engine.convention(), StdDevConvention::Sample);
}

// ── Shape ───────────────────────────────────────────────────────────────

#[test]
fn test_output_preserves_length_order_and_timestamps() {
    let values = [Some(1.0), None, Some(2.0), Some(2.0), None, Some(3.0)];
    let input = series(&values);
    let out = correct(&input);

    assert_eq!(out.len(), input.len());
    for (a, r) in out.iter().zip(input.iter()) {
        assert_eq!(a.timestamp, r.timestamp);
        assert_eq!(a.raw_value, r.raw_value);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let mut values = vec![Some(3.0); 30];
    values[10] = Some(-80.0);
    values[11] = None;
    let input = series(&values);

    let engine = CorrectionEngine::new();
    assert_eq!(engine.correct(&input), engine.correct(&input));
}
