//! Criterion benchmarks for the analysis hot path.
//!
//! Benchmarks:
//! 1. Full pipeline (clean → indicators → signal → forecast → accuracy)
//!    at 1Y/5Y/10Y-sized inputs
//! 2. Individual indicator snapshots on a 10Y series

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stockscope_core::analysis::analyze;
use stockscope_core::data::provider::{QuoteResponse, RawPricePoint};
use stockscope_core::forecast::DEFAULT_HORIZON;
use stockscope_core::indicators::{ema, rsi, sma};

fn make_quote(n: usize) -> QuoteResponse {
    let base = NaiveDate::from_ymd_opt(2014, 6, 3).unwrap();
    QuoteResponse {
        ticker: "BENCH".into(),
        name: "Bench Corp".into(),
        rows: (0..n)
            .map(|i| RawPricePoint {
                date: base + chrono::Duration::days(i as i64),
                close: Some(100.0 + (i as f64 * 0.1).sin() * 10.0),
                volume: Some(1_000_000 + (i as u64 % 500_000)),
            })
            .collect(),
    }
}

fn bench_analyze(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    let mut group = c.benchmark_group("analyze");
    for n in [260_usize, 1_300, 2_600] {
        let quote = make_quote(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &quote, |b, quote| {
            b.iter(|| analyze(black_box(quote), DEFAULT_HORIZON, today).unwrap());
        });
    }
    group.finish();
}

fn bench_indicators(c: &mut Criterion) {
    let closes: Vec<f64> = (0..2_600)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect();
    c.bench_function("sma_50", |b| b.iter(|| sma(black_box(&closes), 50)));
    c.bench_function("ema_12", |b| b.iter(|| ema(black_box(&closes), 12)));
    c.bench_function("rsi_14", |b| b.iter(|| rsi(black_box(&closes), 14)));
}

criterion_group!(benches, bench_analyze, bench_indicators);
criterion_main!(benches);
