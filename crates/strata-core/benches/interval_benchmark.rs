// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use strata_core::math::{
    interval::ClosedInterval,
    policy::{RangeCombination, ResultMutationPolicy},
};

fn interval_pairs() -> Vec<(ClosedInterval<i64>, ClosedInterval<i64>)> {
    // Deterministic mix of overlapping, adjacent and disjoint pairs.
    (0..1_024i64)
        .map(|i| {
            let a_start = (i * 7919) % 10_000;
            let b_start = (i * 104_729) % 10_000;
            (
                ClosedInterval::new(a_start, a_start + (i % 97)).unwrap(),
                ClosedInterval::new(b_start, b_start + (i % 53)).unwrap(),
            )
        })
        .collect()
}

fn bench_combine(c: &mut Criterion) {
    let pairs = interval_pairs();
    let mut group = c.benchmark_group("combine");

    for kind in [
        RangeCombination::Difference,
        RangeCombination::Union,
        RangeCombination::Intersect,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &pairs, |b, pairs| {
            b.iter(|| {
                for (a, other) in pairs {
                    let mut a = *a;
                    black_box(a.combine(
                        Some(other),
                        kind,
                        ResultMutationPolicy::MutateSelfWithLowestResult,
                    ));
                }
            })
        });
    }

    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let full = ClosedInterval::new(u64::MIN, u64::MAX).unwrap();

    c.bench_function("bisect_u64_to_singleton", |b| {
        b.iter(|| {
            let mut current = black_box(full);
            while current.range_size() > 1 {
                current.bisect(true, ResultMutationPolicy::MutateSelfWithHighestResult);
            }
            current
        })
    });

    c.bench_function("split_at_i64", |b| {
        let pairs = interval_pairs();
        b.iter(|| {
            for (a, _) in &pairs {
                let mid = a.start().unwrap_or_default() + 3;
                black_box(a.split_at(mid, true));
            }
        })
    });
}

criterion_group!(benches, bench_combine, bench_split);
criterion_main!(benches);
