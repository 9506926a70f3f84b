//! Generator throughput benchmarks.
//!
//! Drains a seeded generator for each combination of the loop and
//! multi-edge switches. Records are dropped as they arrive, so the
//! measurement covers trial sampling and label resolution only.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use mkdigraph_benches::{error::BenchSetupError, params::GeneratorBenchParams};

/// Seed used for every generator in this benchmark.
const SEED: u64 = 42;

const VERTICES: i64 = 1_000;
const TRIALS: i64 = 100;
const PROBABILITY: f64 = 0.5;

/// `(loops, multi_edges)` combinations to benchmark.
const VARIANTS: &[(bool, bool)] = &[(false, false), (true, false), (false, true), (true, true)];

fn generate_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("generate");
    group.sample_size(20);

    for &(loops, multi_edges) in VARIANTS {
        let params = GeneratorBenchParams {
            vertices: VERTICES,
            trials: TRIALS,
            probability: PROBABILITY,
            loops,
            multi_edges,
        };
        let config = params.builder().build()?;
        group.bench_with_input(
            BenchmarkId::from_parameter(params),
            &config,
            |b, model| {
                b.iter(|| {
                    model
                        .clone()
                        .generate_seeded(SEED)
                        .map(|record| record.heads().len())
                        .sum::<usize>()
                });
            },
        );
    }

    group.finish();
    Ok(())
}

fn generate(c: &mut Criterion) {
    if let Err(err) = generate_impl(c) {
        panic!("generate benchmark setup failed: {err}");
    }
}

criterion_group!(benches, generate);
criterion_main!(benches);
