//! Field operation throughput across degrees and strategies

use binfield::{Element, Field, FieldConfig, StrategyHint};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FIELD_DEGREES: [u32; 5] = [4, 8, 12, 16, 20];
const POOL_SIZE: usize = 10_000;
const SEED: u64 = 42;

fn build(degree: u32, strategy: StrategyHint) -> Field {
    let mut config = FieldConfig::auto(degree);
    config.strategy = strategy;
    Field::create(&config).expect("benchmark field construction")
}

/// Seeded nonzero operands so division and inversion stay total.
fn random_nonzero(field: &Field, count: usize) -> Vec<Element> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    (0..count)
        .map(|_| rng.gen_range(1..field.cardinality()))
        .collect()
}

fn strategies() -> [(&'static str, StrategyHint); 2] {
    [
        ("table", StrategyHint::Table),
        ("direct", StrategyHint::Direct),
    ]
}

fn bench_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for degree in FIELD_DEGREES {
        for (label, strategy) in strategies() {
            let field = build(degree, strategy);
            let pool = random_nonzero(&field, POOL_SIZE);
            let mut idx = 0usize;
            group.bench_function(BenchmarkId::new(label, degree), |b| {
                b.iter(|| {
                    let a = pool[idx % POOL_SIZE];
                    let rhs = pool[(idx + 1) % POOL_SIZE];
                    idx += 1;
                    black_box(field.add(a, rhs))
                })
            });
        }
    }
    group.finish();
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for degree in FIELD_DEGREES {
        for (label, strategy) in strategies() {
            let field = build(degree, strategy);
            let pool = random_nonzero(&field, POOL_SIZE);
            let mut idx = 0usize;
            group.bench_function(BenchmarkId::new(label, degree), |b| {
                b.iter(|| {
                    let a = pool[idx % POOL_SIZE];
                    let rhs = pool[(idx + 1) % POOL_SIZE];
                    idx += 1;
                    black_box(field.mul(a, rhs))
                })
            });
        }
    }
    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("div");
    for degree in FIELD_DEGREES {
        for (label, strategy) in strategies() {
            let field = build(degree, strategy);
            let pool = random_nonzero(&field, POOL_SIZE);
            let mut idx = 0usize;
            group.bench_function(BenchmarkId::new(label, degree), |b| {
                b.iter(|| {
                    let a = pool[idx % POOL_SIZE];
                    let rhs = pool[(idx + 1) % POOL_SIZE];
                    idx += 1;
                    black_box(field.div(a, rhs).expect("pool operands are nonzero"))
                })
            });
        }
    }
    group.finish();
}

fn bench_inversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("inv");
    for degree in FIELD_DEGREES {
        for (label, strategy) in strategies() {
            let field = build(degree, strategy);
            let pool = random_nonzero(&field, POOL_SIZE);
            let mut idx = 0usize;
            group.bench_function(BenchmarkId::new(label, degree), |b| {
                b.iter(|| {
                    let a = pool[idx % POOL_SIZE];
                    idx += 1;
                    black_box(field.inv(a).expect("pool operands are nonzero"))
                })
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_addition,
    bench_multiplication,
    bench_division,
    bench_inversion
);
criterion_main!(benches);
