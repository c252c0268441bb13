// This file is part of Gear.

// Copyright (C) 2025 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Benches for IntervalSet insert.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use intervals::{Interval, IntervalSet};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

const SIZES: [usize; 5] = [1, 10, 100, 1000, 10_000];

/// Consecutive intervals with random lengths below `step`, shuffled.
/// With `overlap > 0` each end is pushed forward by a random amount below `overlap`.
fn rand_intervals(rng: &mut StdRng, num: usize, step: i64, overlap: i64) -> Vec<Interval<i64>> {
    let mut start = 0;
    let mut intervals: Vec<_> = (0..num)
        .map(|_| {
            let end = start + rng.gen_range(0..step);
            let mut interval = Interval::new(start, end);
            if overlap > 0 {
                interval.end += rng.gen_range(0..overlap);
            }
            start = end;
            interval
        })
        .collect();

    intervals.shuffle(rng);
    intervals
}

fn bench_insert(c: &mut Criterion, name: &str, step: i64, overlap: i64) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group(name);

    for num in SIZES {
        // Buffer is reused between iterations, as callers are expected to do.
        let mut set = IntervalSet::with_capacity(num);
        group.bench_with_input(BenchmarkId::from_parameter(num), &num, |b, &num| {
            b.iter_batched(
                || rand_intervals(&mut rng, num, step, overlap),
                |intervals| {
                    set.clear();
                    for interval in intervals {
                        set.insert(black_box(interval));
                    }
                    set.len()
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn insert_non_overlapping(c: &mut Criterion) {
    bench_insert(c, "insert-non-overlapping", 1024, 0);
}

fn insert_overlapping(c: &mut Criterion) {
    bench_insert(c, "insert-overlapping", 1024, 10240);
}

criterion_group!(benches, insert_non_overlapping, insert_overlapping);
criterion_main!(benches);
