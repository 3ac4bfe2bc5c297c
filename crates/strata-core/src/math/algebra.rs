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

//! Set algebra, point splits and bisection on `ClosedInterval`.
//!
//! Every operation comes in two forms. The pure form (`combined`, `union`,
//! `intersection`, `difference`, `split_at`, `halves`) only reads its operands.
//! The policy form (`combine`, `split`, `bisect`) computes the same results and
//! then lets a `ResultMutationPolicy` overwrite `self` with one of them.
//!
//! Boundary adjustments such as `start - 1` or `start + half - 1` are computed
//! in the domain's widened type, so the operations are total on the full range
//! of every integer width.

use crate::{
    math::{
        interval::ClosedInterval,
        policy::{RangeCombination, ResultMutationPolicy},
    },
    num::domain::DiscreteDomain,
};
use num_traits::One;
use smallvec::{SmallVec, smallvec};
use std::{
    cmp::{Ordering, max, min},
    ops::{BitAnd, BitOr},
};

/// The one or two intervals produced by a combination, lowest first.
pub type IntervalPieces<T> = SmallVec<[ClosedInterval<T>; 2]>;

impl<T> ClosedInterval<T>
where
    T: DiscreteDomain,
{
    /// Combines `self` with `other` and returns the results without touching `self`.
    ///
    /// An absent `other` leaves `self` as the result of a difference or union
    /// and yields the empty interval for an intersection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// # use strata_core::math::policy::RangeCombination;
    /// let a = ClosedInterval::new(0, 5).unwrap();
    /// let b = ClosedInterval::new(5, 10).unwrap();
    /// let pieces = a.combined(Some(&b), RangeCombination::Intersect);
    /// assert_eq!(pieces.as_slice(), &[ClosedInterval::singleton(5)]);
    /// ```
    pub fn combined(&self, other: Option<&Self>, kind: RangeCombination) -> IntervalPieces<T> {
        let Some(other) = other else {
            return match kind {
                RangeCombination::Difference | RangeCombination::Union => smallvec![*self],
                RangeCombination::Intersect => smallvec![Self::empty()],
            };
        };

        match kind {
            RangeCombination::Difference => self.difference(other),
            RangeCombination::Union => self.union(other),
            RangeCombination::Intersect => smallvec![self.intersection(other)],
        }
    }

    /// Combines `self` with `other`, then applies `policy` to the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// # use strata_core::math::policy::{RangeCombination, ResultMutationPolicy};
    /// let mut a = ClosedInterval::new(0, 5).unwrap();
    /// let b = ClosedInterval::new(3, 10).unwrap();
    /// a.combine(
    ///     Some(&b),
    ///     RangeCombination::Union,
    ///     ResultMutationPolicy::MutateSelfWithLowestResult,
    /// );
    /// assert_eq!(a, ClosedInterval::new(0, 10).unwrap());
    /// ```
    pub fn combine(
        &mut self,
        other: Option<&Self>,
        kind: RangeCombination,
        policy: ResultMutationPolicy,
    ) -> IntervalPieces<T> {
        let results = self.combined(other, kind);
        policy.apply(self, &results);
        results
    }

    /// Returns the values covered by both intervals.
    ///
    /// Intervals that only touch (`a.end + 1 == b.start`) share no value and
    /// intersect to the empty interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// let a = ClosedInterval::new(0, 10).unwrap();
    /// let b = ClosedInterval::new(5, 15).unwrap();
    /// assert_eq!(a.intersection(&b), ClosedInterval::new(5, 10).unwrap());
    /// assert!(a.intersection(&ClosedInterval::new(11, 15).unwrap()).is_empty());
    /// ```
    pub fn intersection(&self, other: &Self) -> Self {
        match (self.bounds(), other.bounds()) {
            (Some((a_start, a_end)), Some((b_start, b_end))) => {
                let start = max(a_start, b_start);
                let end = min(a_end, b_end);
                if start <= end {
                    Self::new_unchecked(start, end)
                } else {
                    Self::empty()
                }
            }
            _ => Self::empty(),
        }
    }

    /// Returns the union of both intervals.
    ///
    /// Overlapping or adjacent intervals merge into one span. Intervals separated
    /// by at least one value are returned unmerged, lowest first. An empty operand
    /// contributes nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// let a = ClosedInterval::new(0, 4).unwrap();
    /// let adjacent = ClosedInterval::new(5, 9).unwrap();
    /// assert_eq!(a.union(&adjacent).as_slice(), &[ClosedInterval::new(0, 9).unwrap()]);
    ///
    /// let apart = ClosedInterval::new(6, 9).unwrap();
    /// assert_eq!(a.union(&apart).as_slice(), &[a, apart]);
    /// ```
    pub fn union(&self, other: &Self) -> IntervalPieces<T> {
        match (self.bounds(), other.bounds()) {
            (None, None) => smallvec![Self::empty()],
            (None, Some(_)) => smallvec![*other],
            (Some(_), None) => smallvec![*self],
            (Some(a), Some(b)) => {
                let ((lo_start, lo_end), (hi_start, hi_end)) = match self.cmp(other) {
                    Ordering::Greater => (b, a),
                    _ => (a, b),
                };
                if lo_end.widen() + T::Wide::one() < hi_start.widen() {
                    smallvec![
                        Self::new_unchecked(lo_start, lo_end),
                        Self::new_unchecked(hi_start, hi_end)
                    ]
                } else {
                    smallvec![Self::new_unchecked(lo_start, max(lo_end, hi_end))]
                }
            }
        }
    }

    /// Returns the difference of `self` and `other`.
    ///
    /// Equal intervals cancel out to the empty interval, and an empty operand
    /// leaves the other operand as the result. Otherwise the first result is the
    /// part of `self` below `other.start`, which collapses to the empty interval
    /// once `other.start - 1 <= self.start`. If `self` ends before `other` does,
    /// a second result holds the part of `other` above `self.end`, which
    /// collapses to the empty interval once `self.end + 1 >= other.end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// let a = ClosedInterval::new(0, 9).unwrap();
    /// let b = ClosedInterval::new(5, 15).unwrap();
    /// assert_eq!(
    ///     a.difference(&b).as_slice(),
    ///     &[ClosedInterval::new(0, 4).unwrap(), ClosedInterval::new(10, 15).unwrap()]
    /// );
    /// assert_eq!(a.difference(&a).as_slice(), &[ClosedInterval::empty()]);
    /// ```
    pub fn difference(&self, other: &Self) -> IntervalPieces<T> {
        let (a_start, a_end, b_start, b_end) = match (self.bounds(), other.bounds()) {
            (None, None) => return smallvec![Self::empty()],
            (None, Some(_)) => return smallvec![*other],
            (Some(_), None) => return smallvec![*self],
            (Some((a_start, a_end)), Some((b_start, b_end))) => (a_start, a_end, b_start, b_end),
        };

        if self == other {
            return smallvec![Self::empty()];
        }

        let one = T::Wide::one();
        let before_other = b_start.widen() - one;
        let lower = if before_other <= a_start.widen() {
            Self::empty()
        } else {
            Self::from_wide_unchecked(a_start.widen(), min(before_other, a_end.widen()))
        };

        if a_end >= b_end {
            return smallvec![lower];
        }

        let after_self = a_end.widen() + one;
        let upper = if after_self >= b_end.widen() {
            Self::empty()
        } else {
            Self::from_wide_unchecked(max(after_self, b_start.widen()), b_end.widen())
        };
        smallvec![lower, upper]
    }

    /// Splits the interval at `point` without touching `self`.
    ///
    /// When `point` lies inside the interval it goes to the upper half if
    /// `include_point_in_upper` is set and to the lower half otherwise. If that
    /// leaves one half with no values, the whole interval goes to the other
    /// half. A point below the interval yields `(self, ∅)`, a point above it
    /// yields `(∅, self)`, and the empty interval splits into two empty halves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 9).unwrap();
    /// let (lower, upper) = iv.split_at(5, true);
    /// assert_eq!(lower, ClosedInterval::new(0, 4).unwrap());
    /// assert_eq!(upper, ClosedInterval::new(5, 9).unwrap());
    ///
    /// let (lower, upper) = iv.split_at(5, false);
    /// assert_eq!(lower, ClosedInterval::new(0, 5).unwrap());
    /// assert_eq!(upper, ClosedInterval::new(6, 9).unwrap());
    /// ```
    pub fn split_at(&self, point: T, include_point_in_upper: bool) -> (Self, Self) {
        let Some((start, end)) = self.bounds() else {
            return (Self::empty(), Self::empty());
        };

        match self.compare_to_point(point) {
            Ordering::Less => (*self, Self::empty()),
            Ordering::Greater => (Self::empty(), *self),
            Ordering::Equal if include_point_in_upper => {
                if start == end || start == point {
                    (Self::empty(), *self)
                } else {
                    // start < point, so the predecessor stays in the domain.
                    (
                        Self::new_unchecked(start, point - T::one()),
                        Self::new_unchecked(point, end),
                    )
                }
            }
            Ordering::Equal => {
                if start == end || end == point {
                    (*self, Self::empty())
                } else {
                    (
                        Self::new_unchecked(start, point),
                        Self::new_unchecked(point + T::one(), end),
                    )
                }
            }
        }
    }

    /// Splits the interval at `point`, then applies `policy` to `(lower, upper)`.
    pub fn split(
        &mut self,
        point: T,
        include_point_in_upper: bool,
        policy: ResultMutationPolicy,
    ) -> (Self, Self) {
        let (lower, upper) = self.split_at(point, include_point_in_upper);
        policy.apply(self, &[lower, upper]);
        (lower, upper)
    }

    /// Bisects the interval without touching `self`.
    ///
    /// Both halves receive `size / 2` values; the value left over by an odd size
    /// goes to the upper half if `include_odd_in_upper` is set and to the lower
    /// half otherwise. A one-value interval goes entirely to the designated half.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 4).unwrap();
    /// assert_eq!(
    ///     iv.halves(true),
    ///     (ClosedInterval::new(0, 1).unwrap(), ClosedInterval::new(2, 4).unwrap())
    /// );
    /// assert_eq!(
    ///     iv.halves(false),
    ///     (ClosedInterval::new(0, 2).unwrap(), ClosedInterval::new(3, 4).unwrap())
    /// );
    /// ```
    pub fn halves(&self, include_odd_in_upper: bool) -> (Self, Self) {
        let Some((start, end)) = self.bounds() else {
            return (Self::empty(), Self::empty());
        };

        let one = T::Wide::one();
        let size = self.range_size();
        if size == one {
            return if include_odd_in_upper {
                (Self::empty(), *self)
            } else {
                (*self, Self::empty())
            };
        }

        let half = size >> 1;
        let odd = (size & one) == one;
        let (start, end) = (start.widen(), end.widen());

        // size >= 2, so half >= 1 and both halves are non-empty.
        let (lower_len, upper_len) = match (odd, include_odd_in_upper) {
            (true, true) => (half, half + one),
            (true, false) => (half + one, half),
            (false, _) => (half, half),
        };
        (
            Self::from_wide_unchecked(start, start + lower_len - one),
            Self::from_wide_unchecked(end - upper_len + one, end),
        )
    }

    /// Bisects the interval, then applies `policy` to `(lower, upper)`.
    pub fn bisect(
        &mut self,
        include_odd_in_upper: bool,
        policy: ResultMutationPolicy,
    ) -> (Self, Self) {
        let (lower, upper) = self.halves(include_odd_in_upper);
        policy.apply(self, &[lower, upper]);
        (lower, upper)
    }
}

impl<T> BitAnd for ClosedInterval<T>
where
    T: DiscreteDomain,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl<T> BitOr for ClosedInterval<T>
where
    T: DiscreteDomain,
{
    type Output = IntervalPieces<T>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}
