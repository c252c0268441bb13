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

//! [`Interval`] implementation.

use core::{
    fmt::{self, Debug, Formatter},
    ops::Range,
};
use derive_more::{Display, Error};
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

/// Half-open interval `[start, end)`, which contains every `x` such that `start ≤ x < end`.
///
/// `T` can be any ordered type: integers of any width, floats, strings.
/// Only `<` and `>` are ever used to compare bounds, so for floats a NaN bound
/// makes no relation hold and the interval is treated as empty.
///
/// Fields are public and nothing checks them on construction,
/// so an interval with `start > end` can exist, but it's a caller error
/// to ask whether such interval is empty or to insert it into a set.
/// Use [`Interval::try_new`] for a checked construction.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    /// First point of the interval.
    pub start: T,
    /// First point after the interval.
    pub end: T,
}

/// Error returned by checked [`Interval`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IntervalError {
    /// Interval start lies after its end.
    #[display("{}", Self::START_AFTER_END)]
    StartAfterEnd,
}

impl IntervalError {
    const START_AFTER_END: &str = "interval start can't be after its end";

    /// Converts the error into a static error message.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StartAfterEnd => Self::START_AFTER_END,
        }
    }
}

impl<T> Interval<T> {
    /// Creates new interval `[start, end)` without any checks.
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Returns `(start, end)`.
    pub fn into_parts(self) -> (T, T) {
        (self.start, self.end)
    }
}

impl<T: PartialOrd> Interval<T> {
    /// Creates new interval, if `start` is not after `end`.
    pub fn try_new(start: T, end: T) -> Result<Self, IntervalError> {
        let interval = Self { start, end };
        interval.try_is_empty().map(|_| interval)
    }

    /// Returns whether interval has no points, or error if `start > end`.
    ///
    /// Bounds, which are not comparable with each other (NaN),
    /// are reported as empty interval.
    pub fn try_is_empty(&self) -> Result<bool, IntervalError> {
        if self.start < self.end {
            Ok(false)
        } else if self.start > self.end {
            Err(IntervalError::StartAfterEnd)
        } else {
            Ok(true)
        }
    }

    /// Returns `false` if `start < end`, `true` if `start == end` or bounds are not comparable.
    ///
    /// # Panics
    /// If `start > end`: such interval is a caller error and is never corrected silently.
    #[track_caller]
    pub fn is_empty(&self) -> bool {
        match self.try_is_empty() {
            Ok(empty) => empty,
            Err(err) => panic!("{}", err.as_str()),
        }
    }

    /// Returns `true` if `start ≤ point < end`.
    pub fn contains(&self, point: &T) -> bool {
        self.start <= *point && *point < self.end
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?})", self.start, self.end)
    }
}

impl<T: PartialOrd> TryFrom<Range<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
        Self::try_new(range.start, range.end)
    }
}

impl<T> From<Interval<T>> for Range<T> {
    fn from(interval: Interval<T>) -> Self {
        interval.start..interval.end
    }
}
