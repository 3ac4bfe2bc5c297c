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

//! Selectors consumed by the interval algebra.
//!
//! `RangeCombination` picks the set operation performed by `combine`.
//! `ResultMutationPolicy` decides whether an operation also writes one of its
//! results back into the interval it was invoked on. Both are plain choices:
//! exactly one variant applies per call. Each keeps the numeric tag it carries
//! on external boundaries and converts from it with `TryFrom<u8>`.

use crate::{error::IntervalError, math::interval::ClosedInterval, num::domain::DiscreteDomain};

/// The set operation performed by `ClosedInterval::combine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeCombination {
    /// The parts of `self` not covered by the other interval.
    Difference = 0,
    /// The values covered by either interval.
    Union = 1,
    /// The values covered by both intervals.
    Intersect = 2,
}

impl TryFrom<u8> for RangeCombination {
    type Error = IntervalError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Difference),
            1 => Ok(Self::Union),
            2 => Ok(Self::Intersect),
            _ => Err(IntervalError::TagOutOfRange {
                type_name: "RangeCombination",
                tag,
            }),
        }
    }
}

impl std::fmt::Display for RangeCombination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Difference => write!(f, "Difference"),
            Self::Union => write!(f, "Union"),
            Self::Intersect => write!(f, "Intersect"),
        }
    }
}

/// What an algebra operation does with its results besides returning them.
///
/// "Lowest" is the first result of an operation and "highest" the last one.
/// For operations with a single result both policies pick that result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResultMutationPolicy {
    /// Leave the interval the operation was invoked on untouched.
    #[default]
    DoNotMutateSelf = 0,
    /// Overwrite the interval with the lowest result.
    MutateSelfWithLowestResult = 1,
    /// Overwrite the interval with the highest result.
    MutateSelfWithHighestResult = 2,
}

impl ResultMutationPolicy {
    /// Selects the result this policy writes back, if any.
    #[inline]
    pub fn select<T>(self, results: &[ClosedInterval<T>]) -> Option<ClosedInterval<T>>
    where
        T: DiscreteDomain,
    {
        match self {
            Self::DoNotMutateSelf => None,
            Self::MutateSelfWithLowestResult => results.first().copied(),
            Self::MutateSelfWithHighestResult => results.last().copied(),
        }
    }

    /// Writes the selected result into `target`.
    ///
    /// Returns `true` if `target` was overwritten. The whole interval is
    /// replaced at once, so no intermediate state can violate `start <= end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strata_core::math::interval::ClosedInterval;
    /// # use strata_core::math::policy::ResultMutationPolicy;
    /// let results = [
    ///     ClosedInterval::new(0, 4).unwrap(),
    ///     ClosedInterval::new(5, 9).unwrap(),
    /// ];
    /// let mut target = ClosedInterval::new(0, 9).unwrap();
    /// assert!(ResultMutationPolicy::MutateSelfWithHighestResult.apply(&mut target, &results));
    /// assert_eq!(target, results[1]);
    /// ```
    pub fn apply<T>(self, target: &mut ClosedInterval<T>, results: &[ClosedInterval<T>]) -> bool
    where
        T: DiscreteDomain,
    {
        match self.select(results) {
            None => false,
            Some(selected) => {
                tracing::trace!(policy = ?self, from = %target, to = %selected, "overwriting interval with result");
                *target = selected;
                true
            }
        }
    }
}

impl TryFrom<u8> for ResultMutationPolicy {
    type Error = IntervalError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::DoNotMutateSelf),
            1 => Ok(Self::MutateSelfWithLowestResult),
            2 => Ok(Self::MutateSelfWithHighestResult),
            _ => Err(IntervalError::TagOutOfRange {
                type_name: "ResultMutationPolicy",
                tag,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_from_tag() {
        assert_eq!(RangeCombination::try_from(0), Ok(RangeCombination::Difference));
        assert_eq!(RangeCombination::try_from(1), Ok(RangeCombination::Union));
        assert_eq!(RangeCombination::try_from(2), Ok(RangeCombination::Intersect));
        assert_eq!(
            RangeCombination::try_from(3),
            Err(IntervalError::TagOutOfRange {
                type_name: "RangeCombination",
                tag: 3
            })
        );
    }

    #[test]
    fn test_combination_tag_round_trip() {
        for kind in [
            RangeCombination::Difference,
            RangeCombination::Union,
            RangeCombination::Intersect,
        ] {
            assert_eq!(RangeCombination::try_from(kind as u8), Ok(kind));
        }
    }

    #[test]
    fn test_policy_from_tag() {
        assert_eq!(
            ResultMutationPolicy::try_from(2),
            Ok(ResultMutationPolicy::MutateSelfWithHighestResult)
        );
        // Combined flag values are not policies.
        assert!(ResultMutationPolicy::try_from(3).is_err());
        assert_eq!(ResultMutationPolicy::default(), ResultMutationPolicy::DoNotMutateSelf);
    }

    #[test]
    fn test_select() {
        let lo = ClosedInterval::new(0, 1).unwrap();
        let hi = ClosedInterval::new(5, 6).unwrap();
        let both = [lo, hi];

        assert_eq!(ResultMutationPolicy::DoNotMutateSelf.select(&both), None);
        assert_eq!(
            ResultMutationPolicy::MutateSelfWithLowestResult.select(&both),
            Some(lo)
        );
        assert_eq!(
            ResultMutationPolicy::MutateSelfWithHighestResult.select(&both),
            Some(hi)
        );
        assert_eq!(
            ResultMutationPolicy::MutateSelfWithHighestResult.select(&both[..1]),
            Some(lo)
        );
    }

    #[test]
    fn test_apply() {
        let results = [ClosedInterval::<u8>::empty(), ClosedInterval::new(3, 4).unwrap()];

        let mut target = ClosedInterval::new(0u8, 4).unwrap();
        assert!(!ResultMutationPolicy::DoNotMutateSelf.apply(&mut target, &results));
        assert_eq!(target.bounds(), Some((0, 4)));

        assert!(ResultMutationPolicy::MutateSelfWithLowestResult.apply(&mut target, &results));
        assert!(target.is_empty());

        assert!(ResultMutationPolicy::MutateSelfWithHighestResult.apply(&mut target, &results));
        assert_eq!(target.bounds(), Some((3, 4)));
    }

    #[test]
    fn test_display() {
        assert_eq!(RangeCombination::Intersect.to_string(), "Intersect");
    }
}
