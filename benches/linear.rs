//! Benchmarks verifying that both justifiers scale roughly linearly in
//! the number of breaks, not quadratically: `hq_just`'s banded
//! expansion is designed to keep total queue inserts at `O(n)`, so
//! doubling `n` should roughly double the time, not quadruple it.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use justify::{flags, hq_just, hs_just, Break, BreakFlags, Params};

/// A paragraph of `n` evenly spaced space-breaks, each word about 5
/// units wide with a 1-unit space, ending in a forced terminator.
fn lorem_breaks(n: usize) -> Vec<Break> {
    let mut breaks = Vec::with_capacity(n);
    let mut x0 = 0i32;
    for _ in 0..n.saturating_sub(1) {
        x0 += 5;
        breaks.push(Break::new(x0, x0 + 1, 0, BreakFlags::from_bits(flags::IS_SPACE)));
        x0 += 1;
    }
    x0 += 5;
    breaks.push(Break::terminator(x0));
    breaks
}

fn bench_hq_just(c: &mut Criterion) {
    let mut group = c.benchmark_group("hq_just");
    for n in [100usize, 200, 400, 800] {
        let breaks = lorem_breaks(n);
        let params = Params::new(60).max_neg_space(128);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| hq_just(&breaks, &params).unwrap())
        });
    }
    group.finish();
}

fn bench_hs_just(c: &mut Criterion) {
    let mut group = c.benchmark_group("hs_just");
    for n in [100usize, 200, 400, 800] {
        let params = Params::new(60).max_neg_space(128);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter_batched(
                || lorem_breaks(n),
                |mut breaks| hs_just(&mut breaks, &params).unwrap(),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hq_just, bench_hs_just);
criterion_main!(benches);
