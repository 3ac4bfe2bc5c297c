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

use crate::{
    error::{BoundSide, IntervalError},
    num::domain::DiscreteDomain,
};
use num_traits::{One, ToPrimitive, Zero};
use std::{cmp::Ordering, iter::FusedIterator, ops::RangeInclusive};

/// A closed interval `[start, end]` over a discrete domain, or the empty interval.
///
/// Both bounds are inclusive, so a non-empty interval always contains at least
/// one value and may reach `T::DOMAIN_MIN` and `T::DOMAIN_MAX`. Emptiness is an
/// explicit state rather than a property of the bounds: the empty interval has
/// no bounds at all.
///
/// # Invariants
/// For a non-empty interval `start` is always less than or equal to `end`.
///
/// # Ordering
/// Non-empty intervals are ordered by `start`, then by `end`. Every non-empty
/// interval sorts before the empty interval.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosedInterval<T>
where
    T: DiscreteDomain,
{
    bounds: Option<(T, T)>,
}

/// An iterator over the points contained within a `ClosedInterval`.
///
/// # Examples
///
/// ```rust
/// # use strata_core::math::interval::ClosedInterval;
/// let iv = ClosedInterval::new(253u8, 255).unwrap();
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![253, 254, 255]);
/// ```
#[derive(Clone, Debug)]
pub struct ClosedIntervalIterator<T>
where
    T: DiscreteDomain,
{
    remaining: Option<(T, T)>,
}

impl<T> Iterator for ClosedIntervalIterator<T>
where
    T: DiscreteDomain,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (front, back) = self.remaining?;
        self.remaining = if front < back {
            Some((front + T::one(), back))
        } else {
            None
        };
        Some(front)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            None => (0, Some(0)),
            Some((front, back)) => {
                match (back.widen() - front.widen() + T::Wide::one()).to_usize() {
                    Some(n) => (n, Some(n)),
                    None => (usize::MAX, None),
                }
            }
        }
    }
}

impl<T> DoubleEndedIterator for ClosedIntervalIterator<T>
where
    T: DiscreteDomain,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let (front, back) = self.remaining?;
        self.remaining = if front < back {
            Some((front, back - T::one()))
        } else {
            None
        };
        Some(back)
    }
}

impl<T> FusedIterator for ClosedIntervalIterator<T> where T: DiscreteDomain {}

impl<T> ClosedInterval<T>
where
    T: DiscreteDomain,
{
    /// Creates a new non-empty `ClosedInterval`.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::OutOfRange` if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 9).unwrap();
    /// assert_eq!(iv.range_size(), 10i64);
    /// assert!(ClosedInterval::new(9, 0).is_err());
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Result<Self, IntervalError> {
        if start > end {
            return Err(IntervalError::start_above_end(start, end));
        }
        Ok(Self {
            bounds: Some((start, end)),
        })
    }

    /// Creates a new non-empty `ClosedInterval` without checking invariants in release builds.
    ///
    /// The caller must ensure `start <= end`.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self {
            bounds: Some((start, end)),
        }
    }

    /// Creates an interval from bounds given in the widened type.
    ///
    /// Both bounds must lie inside the domain and satisfy `start <= end`.
    #[inline]
    pub(crate) fn from_wide_unchecked(start: T::Wide, end: T::Wide) -> Self {
        Self::new_unchecked(T::narrow_unchecked(start), T::narrow_unchecked(end))
    }

    /// Returns the empty interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::<i32>::empty();
    /// assert!(iv.is_empty());
    /// assert_eq!(iv, ClosedInterval::default());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self { bounds: None }
    }

    /// Creates the one-element interval `[value, value]`.
    #[inline]
    pub const fn singleton(value: T) -> Self {
        Self {
            bounds: Some((value, value)),
        }
    }

    /// Returns the inclusive start bound, or `None` for the empty interval.
    #[inline]
    pub fn start(&self) -> Option<T> {
        self.bounds.map(|(start, _)| start)
    }

    /// Returns the inclusive end bound, or `None` for the empty interval.
    #[inline]
    pub fn end(&self) -> Option<T> {
        self.bounds.map(|(_, end)| end)
    }

    /// Returns `(start, end)`, or `None` for the empty interval.
    #[inline]
    pub const fn bounds(&self) -> Option<(T, T)> {
        self.bounds
    }

    /// Returns `true` if this is the empty interval.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Returns `true` if `value` lies within `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 10).unwrap();
    /// assert!(iv.contains(0));
    /// assert!(iv.contains(10));
    /// assert!(!iv.contains(11));
    /// assert!(!ClosedInterval::<i32>::empty().contains(0));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.compare_to_point(value) == Ordering::Equal
    }

    /// Sets the start bound.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::OutOfRange` if `start` is higher than the current
    /// end bound, and `IntervalError::NoBounds` if the interval is empty. The
    /// interval is left unchanged on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// let mut iv = ClosedInterval::new(0, 10).unwrap();
    /// iv.set_start(4).unwrap();
    /// assert_eq!(iv.start(), Some(4));
    /// assert!(iv.set_start(11).is_err());
    /// ```
    pub fn set_start(&mut self, start: T) -> Result<(), IntervalError> {
        match &mut self.bounds {
            None => Err(IntervalError::NoBounds {
                side: BoundSide::Start,
            }),
            Some((_, end)) if start > *end => Err(IntervalError::start_above_end(start, *end)),
            Some((current, _)) => {
                *current = start;
                Ok(())
            }
        }
    }

    /// Sets the end bound.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::OutOfRange` if `end` is lower than the current
    /// start bound, and `IntervalError::NoBounds` if the interval is empty. The
    /// interval is left unchanged on error.
    pub fn set_end(&mut self, end: T) -> Result<(), IntervalError> {
        match &mut self.bounds {
            None => Err(IntervalError::NoBounds {
                side: BoundSide::End,
            }),
            Some((start, _)) if end < *start => Err(IntervalError::end_below_start(end, *start)),
            Some((_, current)) => {
                *current = end;
                Ok(())
            }
        }
    }

    /// Replaces both bounds at once, turning an empty interval into a non-empty one.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::OutOfRange` if `start > end`. The interval is left
    /// unchanged on error.
    pub fn set_bounds(&mut self, start: T, end: T) -> Result<(), IntervalError> {
        *self = Self::new(start, end)?;
        Ok(())
    }

    /// Makes the interval empty.
    #[inline]
    pub fn clear(&mut self) {
        self.bounds = None;
    }

    /// Replaces the interval with `other`, returning the previous value.
    #[inline]
    pub fn replace(&mut self, other: Self) -> Self {
        std::mem::replace(self, other)
    }

    /// Locates `point` relative to the interval.
    ///
    /// Returns `Less` if `point < start`, `Equal` if `start <= point <= end`
    /// and `Greater` if `point > end`. Every point compares `Greater` against
    /// the empty interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::cmp::Ordering;
    /// # use strata_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(5, 10).unwrap();
    /// assert_eq!(iv.compare_to_point(4), Ordering::Less);
    /// assert_eq!(iv.compare_to_point(5), Ordering::Equal);
    /// assert_eq!(iv.compare_to_point(11), Ordering::Greater);
    /// assert_eq!(ClosedInterval::empty().compare_to_point(0), Ordering::Greater);
    /// ```
    pub fn compare_to_point(&self, point: T) -> Ordering {
        match self.bounds {
            None => Ordering::Greater,
            Some((start, _)) if point < start => Ordering::Less,
            Some((_, end)) if point > end => Ordering::Greater,
            Some(_) => Ordering::Equal,
        }
    }

    /// Returns the number of values in the interval.
    ///
    /// The size is computed in the widened type and therefore cannot overflow,
    /// even for the full range of `u64` or `i64`. The empty interval has size `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// assert_eq!(ClosedInterval::singleton(7u32).range_size(), 1);
    /// assert_eq!(ClosedInterval::new(u64::MIN, u64::MAX).unwrap().range_size(), 1i128 << 64);
    /// assert_eq!(ClosedInterval::<i8>::empty().range_size(), 0);
    /// ```
    pub fn range_size(&self) -> T::Wide {
        match self.bounds {
            None => T::Wide::zero(),
            Some((start, end)) => end.widen() - start.widen() + T::Wide::one(),
        }
    }

    /// Compares against another, possibly absent interval.
    ///
    /// An absent `other` always compares `Less`; otherwise this is the total
    /// order of `ClosedInterval` (non-empty intervals by `start` then `end`,
    /// the empty interval last).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::cmp::Ordering;
    /// # use strata_core::math::interval::ClosedInterval;
    /// let a = ClosedInterval::new(0, 5).unwrap();
    /// let b = ClosedInterval::new(0, 7).unwrap();
    /// assert_eq!(a.compare_to(Some(&b)), Ordering::Less);
    /// assert_eq!(a.compare_to(Some(&ClosedInterval::empty())), Ordering::Less);
    /// assert_eq!(a.compare_to(None), Ordering::Less);
    /// ```
    #[inline]
    pub fn compare_to(&self, other: Option<&Self>) -> Ordering {
        match other {
            None => Ordering::Less,
            Some(other) => self.cmp(other),
        }
    }

    /// Returns the bounds as a `RangeInclusive`, or `None` for the empty interval.
    #[inline]
    pub fn to_range_inclusive(&self) -> Option<RangeInclusive<T>> {
        self.bounds.map(|(start, end)| start..=end)
    }

    /// Creates an iterator over the points in the interval, in ascending order.
    #[inline]
    pub fn iter(&self) -> ClosedIntervalIterator<T> {
        ClosedIntervalIterator {
            remaining: self.bounds,
        }
    }
}

impl<T> Ord for ClosedInterval<T>
where
    T: DiscreteDomain,
{
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.bounds, other.bounds) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some((a_start, a_end)), Some((b_start, b_end))) => {
                a_start.cmp(&b_start).then_with(|| a_end.cmp(&b_end))
            }
        }
    }
}

impl<T> PartialOrd for ClosedInterval<T>
where
    T: DiscreteDomain,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Default for ClosedInterval<T>
where
    T: DiscreteDomain,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: DiscreteDomain,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bounds {
            None => f.write_str("ClosedInterval(∅)"),
            Some((start, end)) => f
                .debug_struct("ClosedInterval")
                .field("start", &start)
                .field("end", &end)
                .finish(),
        }
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: DiscreteDomain,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bounds {
            None => write!(f, "∅"),
            Some((start, end)) => write!(f, "[{}, {}]", start, end),
        }
    }
}

impl<T> IntoIterator for ClosedInterval<T>
where
    T: DiscreteDomain,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &ClosedInterval<T>
where
    T: DiscreteDomain,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Converts a std inclusive range. An inverted range (`start > end`) is empty
/// in std and becomes the empty interval here.
impl<T> From<RangeInclusive<T>> for ClosedInterval<T>
where
    T: DiscreteDomain,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        if start <= end {
            Self::new_unchecked(start, end)
        } else {
            Self::empty()
        }
    }
}
