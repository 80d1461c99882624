use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mend_core::{Record, Series, Timestamp};
use mend_correction::CorrectionEngine;

/// A day of 10-second flowmeter readings with periodic spikes and gaps.
fn build_day_series() -> Series {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let n = 8_640;
    let records = (0..n)
        .map(|i| {
            let ts: Timestamp = (start + Duration::seconds(10 * i as i64)).into();
            let value = match i {
                i if i % 997 == 0 => None,
                i if i % 613 == 0 => Some(900.0),
                i => Some(40.0 + ((i % 50) as f64) * 0.2),
            };
            Record::new(ts, value)
        })
        .collect();
    Series::new(records).unwrap()
}

fn bench_correct_day(c: &mut Criterion) {
    let series = build_day_series();
    let engine = CorrectionEngine::new();
    c.bench_function("correct_8640_readings", |b| {
        b.iter(|| engine.correct(black_box(&series)))
    });
}

criterion_group!(benches, bench_correct_day);
criterion_main!(benches);
