//! Performance benchmarks for the tool rental pricing engine.
//!
//! This benchmark suite covers:
//! - Chargeable day counting over short and long rentals
//! - A single end-to-end checkout
//! - A batch of checkouts across every catalog tool
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use tool_rental::calculation::{ChargePolicy, count_chargeable_days};
use tool_rental::checkout::CheckoutService;
use tool_rental::config::ConfigLoader;

fn create_service() -> CheckoutService {
    let loader = ConfigLoader::builtin().expect("Failed to load catalog");
    CheckoutService::new(loader.into_catalog())
}

/// Benchmark: Chargeable day counting for increasing rental lengths.
fn bench_count_chargeable_days(c: &mut Criterion) {
    let checkout = NaiveDate::from_ymd_opt(2015, 7, 2).unwrap();
    let mut group = c.benchmark_group("count_chargeable_days");

    for days in [9u32, 90, 365] {
        group.throughput(Throughput::Elements(u64::from(days)));
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter(|| {
                count_chargeable_days(
                    black_box(ChargePolicy::SkipWeekendsAndHolidays),
                    black_box(checkout),
                    black_box(days),
                )
            })
        });
    }

    group.finish();
}

/// Benchmark: Single checkout from raw inputs.
fn bench_single_checkout(c: &mut Criterion) {
    let service = create_service();

    c.bench_function("single_checkout", |b| {
        b.iter(|| black_box(service.checkout(black_box("LADW"), 3, 10, black_box("7/2/20"))))
    });
}

/// Benchmark: Batch of 100 checkouts across the catalog.
fn bench_batch_100(c: &mut Criterion) {
    let service = create_service();
    let codes: Vec<String> = service.catalog().tools().map(|t| t.code.clone()).collect();
    let requests: Vec<(String, i32, i32)> = (0..100)
        .map(|i| (codes[i % codes.len()].clone(), (i % 14) as i32 + 1, (i % 5) as i32 * 10))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));
    group.bench_function("batch_100", |b| {
        b.iter(|| {
            let results: Vec<_> = requests
                .iter()
                .map(|(code, days, discount)| service.checkout(code, *days, *discount, "9/3/15"))
                .collect();
            black_box(results)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_count_chargeable_days,
    bench_single_checkout,
    bench_batch_100
);
criterion_main!(benches);
