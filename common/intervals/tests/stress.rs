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

//! Randomized stress testing for IntervalSet.

use intervals::{Interval, IntervalSet, mock};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::BTreeSet;

fn init_logger() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("intervals=debug"),
    )
    .is_test(true)
    .try_init();
}

fn rand_interval(rng: &mut StdRng, max_start: i64, max_len: i64) -> Interval<i64> {
    let start = rng.gen_range(0..max_start);
    let end = start + rng.gen_range(0..max_len);
    Interval::new(start, end)
}

fn stress_test(iterations: usize, max_inserts: usize, max_start: i64, max_len: i64) {
    let mut rng = StdRng::seed_from_u64(42);

    for i in 0..iterations {
        log::debug!("Iteration: {i}");
        let mut set = IntervalSet::new();
        let mut points = BTreeSet::new();
        let count = rng.gen_range(1..=max_inserts);
        let mut start = i64::MAX;
        let mut end = i64::MIN;

        for _ in 0..count {
            let interval = rand_interval(&mut rng, max_start, max_len);
            log::trace!("insert {interval:?} in {set:?}");
            set = set.inserted(interval);
            points.extend(interval.start..interval.end);

            if interval.is_empty() {
                continue;
            }

            // Track our own idea of the first start and the last end.
            start = start.min(interval.start);
            end = end.max(interval.end);
            assert_eq!(set.start(), Some(&start));
            assert_eq!(set.end(), Some(&end));
        }

        assert!(set.len() <= count);

        mock::check_invariants(&set);

        let covered: BTreeSet<i64> = set.iter().flat_map(|i| i.start..i.end).collect();
        assert_eq!(covered, points);

        for point in -1..=max_start + max_len {
            assert_eq!(set.contains(&point), points.contains(&point));
        }
    }
}

#[test]
fn stress_simple() {
    init_logger();
    stress_test(1_000, 10, 1024, 128);
}

#[test]
fn stress_dense() {
    init_logger();
    stress_test(1_000, 100, 256, 8);
}

#[ignore = "takes too long"]
#[test]
fn stress_hard() {
    init_logger();
    stress_test(100_000, 1000, 1 << 16, 1 << 10);
}

#[test]
#[should_panic(expected = "interval start can't be after its end")]
fn insert_start_after_end_panics() {
    IntervalSet::new().inserted(Interval::new(2i64, 1));
}
