//! Criterion benchmarks for the exact calculator and the simulator.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use dicecalc_core::{ExpectationCalculator, MonteCarloSimulator, Precision};

fn bench_expectation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ExpectedRoundsCold");
    for &n in &[10u32, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                ExpectationCalculator::new(Precision::default())
                    .expected_rounds(n)
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_simulation(c: &mut Criterion) {
    let sim = MonteCarloSimulator::new(Some(42));
    let mut group = c.benchmark_group("Simulation");
    for &n in &[2u32, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| sim.simulate(n, 10_000).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_expectation, bench_simulation);
criterion_main!(benches);
