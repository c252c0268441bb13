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

//! [`IntervalSet`] implementation.

use crate::interval::Interval;
use alloc::{
    fmt::{self, Debug},
    vec::{self, Vec},
};
use core::{fmt::Formatter, mem, slice};
use derive_more::{Display, Error};
use parity_scale_codec::{Decode, Encode, Input};
use scale_info::TypeInfo;

/// # Sorted set of non overlapping intervals
/// Stores half-open intervals in a vector in ascending order.
/// Between any two operations the following holds:
/// - each interval is not empty: `start < end`;
/// - each interval ends strictly before the next one starts,
///   so intervals never overlap and never touch, touching intervals are merged.
///
/// Search complexity is `O(log(n))`. Insert complexity is `O(log(n) + k)`,
/// where `n` is amount of intervals in set and `k` is amount of intervals
/// which lie after the inserted one. Inserts reuse the vector buffer
/// while it has enough capacity and reallocate with double length otherwise.
///
/// # Examples
/// ```
/// use intervals::{Interval, IntervalSet};
///
/// let mut set = IntervalSet::new();
/// set.insert(Interval::new(0, 2));
/// set.insert(Interval::new(4, 5));
/// assert_eq!(set.search(&1), Some(&Interval::new(0, 2)));
/// // End is not a part of interval.
/// assert_eq!(set.search(&2), None);
///
/// // Fills the gap and touches both neighbours, so everything is merged.
/// set.insert(Interval::new(2, 4));
/// assert_eq!(set.as_slice(), &[Interval::new(0, 5)]);
///
/// // Empty interval changes nothing.
/// assert!(!set.insert(Interval::new(12, 12)));
/// ```
///
/// # Concurrency
/// The set is not synchronized: share it behind a reader-writer lock
/// if concurrent access is needed.
#[derive(Clone, PartialEq, Eq, Hash, Encode, TypeInfo)]
pub struct IntervalSet<T> {
    inner: Vec<Interval<T>>,
}

/// Error returned when a sequence of intervals can't be adopted as [`IntervalSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IntervalSetError {
    /// Interval has `start ≥ end` or not comparable bounds.
    #[display("{}: interval #{index}", Self::EMPTY_INTERVAL)]
    EmptyInterval {
        /// Index of interval in the sequence.
        index: usize,
    },
    /// Interval doesn't start strictly after the previous one ends.
    #[display("{}: interval #{index}", Self::UNORDERED)]
    Unordered {
        /// Index of interval in the sequence.
        index: usize,
    },
}

impl IntervalSetError {
    const EMPTY_INTERVAL: &str = "interval set can't contain empty intervals";
    const UNORDERED: &str = "interval set must be ascending without overlaps and touches";

    /// Converts the error into a static error message.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyInterval { .. } => Self::EMPTY_INTERVAL,
            Self::Unordered { .. } => Self::UNORDERED,
        }
    }
}

impl<T> IntervalSet<T> {
    /// Creates new empty set.
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Creates new empty set, which can hold `capacity` intervals without reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Returns amount of intervals in set.
    ///
    /// Complexity: O(1).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if set contains no intervals.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns amount of intervals set can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the smallest point in set.
    pub fn start(&self) -> Option<&T> {
        self.inner.first().map(|i| &i.start)
    }

    /// Returns end of the last interval in set. Note, that it's not a point of set.
    pub fn end(&self) -> Option<&T> {
        self.inner.last().map(|i| &i.end)
    }

    /// Returns iterator over intervals in ascending order.
    pub fn iter(&self) -> slice::Iter<'_, Interval<T>> {
        self.inner.iter()
    }

    /// Returns intervals in ascending order.
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.inner
    }

    /// Converts set into vector of intervals in ascending order.
    pub fn into_vec(self) -> Vec<Interval<T>> {
        self.inner
    }

    /// Removes all intervals, keeping allocated buffer.
    pub fn clear(&mut self) {
        self.inner.clear()
    }
}

impl<T: PartialOrd> IntervalSet<T> {
    /// Returns interval containing `point`, or `None` if `point` lies outside of any interval.
    ///
    /// Intervals are half-open, so `point` equal to some interval end is not found
    /// in it, unless the next interval starts there, which never happens since
    /// touching intervals are merged.
    ///
    /// Complexity: `O(log(n))`, where `n` is amount of intervals in set.
    pub fn search(&self, point: &T) -> Option<&Interval<T>> {
        let (first, last) = (self.inner.first()?, self.inner.last()?);
        if first.start > *point || last.end < *point {
            return None;
        }

        // First interval, which ends after `point`.
        let idx = self.inner.partition_point(|i| i.end <= *point);
        self.inner.get(idx).filter(|i| i.start <= *point)
    }

    /// Returns `true` if `point` lies in one of set intervals.
    pub fn contains(&self, point: &T) -> bool {
        self.search(point).is_some()
    }

    /// Inserts `interval` into set, merging it with all intervals it overlaps or touches.
    /// - if `interval` is empty, then nothing happens.
    /// - otherwise, after insertion for each `p` ∈ `interval` ⇒ `p` ∈ `self`
    ///   and set invariants hold.
    ///
    /// Returns whether `self` has been changed.
    ///
    /// # Panics
    /// If `interval.start > interval.end`.
    #[track_caller]
    pub fn insert(&mut self, mut interval: Interval<T>) -> bool {
        if interval.is_empty() {
            return false;
        }

        // First interval, which ends at or after `interval` start.
        // Intervals before it stay untouched.
        let skip = self.inner.partition_point(|i| i.end < interval.start);

        // Intervals, which overlap or touch `interval`, are `skip..tail`.
        // An absorbed interval can't make `interval` reach the next one,
        // because stored intervals never touch, so comparing with
        // the initial `interval.end` is enough.
        let tail = skip
            + self.inner[skip..]
                .iter()
                .take_while(|i| i.start <= interval.end)
                .count();

        if tail > skip {
            let first = &mut self.inner[skip];
            if tail == skip + 1 && first.start <= interval.start && first.end >= interval.end {
                // Nothing to do: `interval` is completely inside existing one.
                return false;
            }

            // Only the first absorbed interval can start earlier, and only the last
            // one can end later. Both are dropped below, so bounds can be swapped out.
            if first.start < interval.start {
                mem::swap(&mut first.start, &mut interval.start);
            }
            let last = &mut self.inner[tail - 1];
            if last.end > interval.end {
                mem::swap(&mut last.end, &mut interval.end);
            }

            self.inner[skip] = interval;
            self.inner.drain(skip + 1..tail);
            return true;
        }

        let len = self.inner.len() + 1;
        if len > self.inner.capacity() {
            let capacity = len.saturating_mul(2);
            log::trace!("interval set grows: len = {len}, capacity = {capacity}");

            let mut inner = Vec::with_capacity(capacity);
            let mut old = mem::take(&mut self.inner).into_iter();
            inner.extend(old.by_ref().take(skip));
            inner.push(interval);
            inner.extend(old);
            self.inner = inner;
        } else {
            self.inner.insert(skip, interval);
        }

        true
    }

    /// Consuming form of [`IntervalSet::insert`]: returns set with `interval` inserted.
    ///
    /// # Panics
    /// If `interval.start > interval.end`.
    #[track_caller]
    pub fn inserted(mut self, interval: Interval<T>) -> Self {
        self.insert(interval);
        self
    }

    // Negated comparisons reject not comparable bounds as well.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn validate(intervals: &[Interval<T>]) -> Result<(), IntervalSetError> {
        for (index, interval) in intervals.iter().enumerate() {
            if !(interval.start < interval.end) {
                return Err(IntervalSetError::EmptyInterval { index });
            }
        }

        match intervals
            .windows(2)
            .position(|pair| !(pair[0].end < pair[1].start))
        {
            Some(prev) => Err(IntervalSetError::Unordered { index: prev + 1 }),
            None => Ok(()),
        }
    }
}

impl<T> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for IntervalSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl<T: PartialOrd> TryFrom<Vec<Interval<T>>> for IntervalSet<T> {
    type Error = IntervalSetError;

    fn try_from(inner: Vec<Interval<T>>) -> Result<Self, Self::Error> {
        Self::validate(&inner)
            .inspect_err(|err| log::debug!("rejected interval set: {err}"))
            .map(|_| Self { inner })
    }
}

impl<T: PartialOrd + Decode> Decode for IntervalSet<T> {
    fn decode<I: Input>(input: &mut I) -> Result<Self, parity_scale_codec::Error> {
        let inner = Vec::<Interval<T>>::decode(input)?;
        Self::try_from(inner).map_err(|err| err.as_str().into())
    }
}

impl<T: PartialOrd> FromIterator<Interval<T>> for IntervalSet<T> {
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialOrd> Extend<Interval<T>> for IntervalSet<T> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.insert(interval);
        }
    }
}

impl<T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T> From<IntervalSet<T>> for Vec<Interval<T>> {
    fn from(set: IntervalSet<T>) -> Self {
        set.inner
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for IntervalSet<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: PartialOrd + serde::Deserialize<'de>> serde::Deserialize<'de> for IntervalSet<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let inner = Vec::<Interval<T>>::deserialize(deserializer)?;
        Self::try_from(inner).map_err(serde::de::Error::custom)
    }
}
