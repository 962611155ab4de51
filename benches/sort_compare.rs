// Criterion Benchmarks - Hand-Written vs Library Implementations
// Compares the quicksort and both solutions of Problem 1 and Problem 2.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use algorithms_tour::letters::{self, random_letters};
use algorithms_tour::prices::{self, PricePoint, PriceSeries};
use algorithms_tour::quicksort::{quicksort_with, PivotStrategy};

fn random_values(len: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(12345);
    (0..len).map(|_| rng.gen_range(0..1000)).collect()
}

fn benchmark_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_implementations");

    for size in [100, 1_000, 10_000] {
        let data = random_values(size);

        group.bench_with_input(BenchmarkId::new("quicksort_last", size), &data, |b, data| {
            b.iter(|| {
                let mut v = data.clone();
                quicksort_with(black_box(&mut v), PivotStrategy::Last);
                v
            })
        });

        group.bench_with_input(BenchmarkId::new("quicksort_median3", size), &data, |b, data| {
            b.iter(|| {
                let mut v = data.clone();
                quicksort_with(black_box(&mut v), PivotStrategy::MedianOfThree);
                v
            })
        });

        group.bench_with_input(BenchmarkId::new("sort_unstable", size), &data, |b, data| {
            b.iter(|| {
                let mut v = data.clone();
                black_box(&mut v).sort_unstable();
                v
            })
        });
    }

    group.finish();
}

fn benchmark_letters(c: &mut Criterion) {
    let mut group = c.benchmark_group("letters");
    let input = random_letters(1_000, &mut StdRng::seed_from_u64(7));

    group.bench_function("native", |b| {
        b.iter(|| letters::native::order_letters(black_box(&input), PivotStrategy::Last))
    });
    group.bench_function("std", |b| {
        b.iter(|| letters::std_algos::order_letters(black_box(&input)))
    });

    group.finish();
}

fn benchmark_prices(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_stats");
    let mut rng = StdRng::seed_from_u64(99);
    let points = (0..5_000)
        .map(|i| PricePoint::new(format!("t{}", i), rng.gen_range(20.0..30.0)))
        .collect();
    let series = PriceSeries::new(points).expect("non-empty series");

    group.bench_function("native", |b| {
        b.iter(|| prices::native::compute(black_box(&series), 5, PivotStrategy::MedianOfThree))
    });
    group.bench_function("std", |b| {
        b.iter(|| prices::std_algos::compute(black_box(&series), 5))
    });

    group.finish();
}

criterion_group!(benches, benchmark_sorts, benchmark_letters, benchmark_prices);
criterion_main!(benches);
