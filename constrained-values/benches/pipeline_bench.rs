//! Benchmarks for constrained-value construction.

use constrained_values::core::Scalar;
use constrained_values::kinds::{EnumValue, RangeValue};
use constrained_values::pipeline::{ConstrainedValue, PipelineConfig};
use constrained_values::strategies::{Lowercase, OneOf, Strategy, Trim};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;
use std::sync::Arc;

constrained_values::define_kind!(Code => Scalar);

fn range_benchmark(c: &mut Criterion) {
    c.bench_function("range_int", |b| {
        b.iter(|| RangeValue::new(black_box(42), 0, 150));
    });
    c.bench_function("range_int_to_decimal", |b| {
        b.iter(|| RangeValue::new(black_box(42), Decimal::ZERO, Decimal::ONE_HUNDRED));
    });
}

fn enum_benchmark(c: &mut Criterion) {
    c.bench_function("enum_text", |b| {
        b.iter(|| EnumValue::new(black_box("info"), ["debug", "info", "warning", "error"]));
    });
}

fn shared_pipeline_benchmark(c: &mut Criterion) {
    let strategies: Arc<[Strategy<Scalar>]> = Arc::from(vec![
        Strategy::transformation(Trim),
        Strategy::transformation(Lowercase),
        Strategy::validation(OneOf::new(["usd", "eur", "gbp"])),
    ]);
    let config = PipelineConfig::new().with_log_stages(false);
    c.bench_function("shared_pipeline", |b| {
        b.iter(|| {
            ConstrainedValue::<Code>::from_shared(black_box(" USD "), Arc::clone(&strategies), &config)
        });
    });
}

criterion_group!(benches, range_benchmark, enum_benchmark, shared_pipeline_benchmark);
criterion_main!(benches);
