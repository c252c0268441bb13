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

//! Mock for testing: naive model of interval set and invariant checks.

use crate::{Interval, IntervalSet};
use alloc::{fmt::Debug, vec::Vec};

/// Naive interval set: keeps every inserted interval as is.
/// Lookup is a linear scan, normalization sorts and merges all intervals.
#[derive(Debug, Clone, Default)]
pub struct NaiveSet<T> {
    intervals: Vec<Interval<T>>,
}

impl<T: Ord + Clone> NaiveSet<T> {
    /// Creates new empty naive set.
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Remembers `interval`, if it's not empty.
    pub fn insert(&mut self, interval: Interval<T>) {
        if interval.start < interval.end {
            self.intervals.push(interval);
        }
    }

    /// Returns `true` if any inserted interval contains `point`.
    pub fn contains(&self, point: &T) -> bool {
        self.intervals.iter().any(|i| i.contains(point))
    }

    /// Returns union of inserted intervals as sorted not touching intervals.
    pub fn normalized(&self) -> Vec<Interval<T>> {
        let mut sorted = self.intervals.clone();
        sorted.sort_by(|a, b| a.start.cmp(&b.start));

        let mut res: Vec<Interval<T>> = Vec::with_capacity(sorted.len());
        for interval in sorted {
            match res.last_mut() {
                Some(last) if interval.start <= last.end => {
                    if interval.end > last.end {
                        last.end = interval.end;
                    }
                }
                _ => res.push(interval),
            }
        }
        res
    }
}

/// Asserts that `set` is ascending, has no empty intervals and no overlapping or touching ones.
pub fn check_invariants<T: PartialOrd + Debug>(set: &IntervalSet<T>) {
    for interval in set.iter() {
        assert!(interval.start < interval.end, "empty interval {interval:?} in {set:?}");
    }
    for pair in set.as_slice().windows(2) {
        assert!(
            pair[0].end < pair[1].start,
            "{:?} and {:?} must have a gap between in {set:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Action applied both to [`IntervalSet`] and to [`NaiveSet`].
#[derive(Debug, Clone)]
pub enum SetAction<T> {
    /// Insert interval.
    Insert(Interval<T>),
    /// Insert interval twice in a row, second insert must change nothing.
    InsertTwice(Interval<T>),
    /// Search point.
    Search(T),
}

/// Applies `actions` to [`IntervalSet`] and to [`NaiveSet`], comparing them after each action.
pub fn test_set<T: Ord + Clone + Debug>(actions: Vec<SetAction<T>>) {
    let mut set = IntervalSet::new();
    let mut expected = NaiveSet::new();
    let mut inserted = 0;

    for action in actions {
        log::debug!("{action:?}");
        match action {
            SetAction::Insert(interval) => {
                inserted += 1;
                expected.insert(interval.clone());
                set.insert(interval);
            }
            SetAction::InsertTwice(interval) => {
                inserted += 1;
                expected.insert(interval.clone());
                set.insert(interval.clone());
                let once = set.clone();
                assert!(!set.insert(interval), "second insert must change nothing");
                assert_eq!(set, once);
            }
            SetAction::Search(point) => {
                let found = set.search(&point);
                assert_eq!(found.is_some(), expected.contains(&point), "point {point:?}");
                if let Some(interval) = found {
                    assert!(interval.contains(&point));
                }
            }
        }

        check_invariants(&set);
        assert!(set.len() <= inserted);
        assert_eq!(set.as_slice(), expected.normalized().as_slice());
    }
}
