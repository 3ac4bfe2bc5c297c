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

//! Errors raised when constructing or mutating intervals.
//!
//! All conditions the algebra defines (an absent operand, a split point on the
//! boundary, an empty input) are ordinary branches that return valid results.
//! Errors are reserved for requests that would break the `start <= end`
//! invariant or name a selector that does not exist.

use std::fmt::Display;
use thiserror::Error;

/// Identifies one of the two bounds of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSide {
    /// The inclusive lower bound.
    Start,
    /// The inclusive upper bound.
    End,
}

impl Display for BoundSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// The error type for interval construction, bound mutation and tag parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// A bound was set so that `start > end` would hold.
    #[error("{side} bound out of range: {message}")]
    OutOfRange { side: BoundSide, message: String },

    /// A numeric tag did not name any variant of the selector type.
    #[error("{type_name} tag {tag} is out of range")]
    TagOutOfRange { type_name: &'static str, tag: u8 },

    /// A single bound was set on the empty interval, which has none.
    #[error("cannot set the {side} bound of an empty interval")]
    NoBounds { side: BoundSide },
}

impl IntervalError {
    /// Builds the error for a `start` that would exceed `end`.
    pub(crate) fn start_above_end<T: Display>(start: T, end: T) -> Self {
        Self::OutOfRange {
            side: BoundSide::Start,
            message: format!("start {start} is higher than end {end}"),
        }
    }

    /// Builds the error for an `end` that would fall below `start`.
    pub(crate) fn end_below_start<T: Display>(end: T, start: T) -> Self {
        Self::OutOfRange {
            side: BoundSide::End,
            message: format!("end {end} is lower than start {start}"),
        }
    }

    /// Returns the bound this error refers to, if any.
    pub fn side(&self) -> Option<BoundSide> {
        match self {
            Self::OutOfRange { side, .. } | Self::NoBounds { side } => Some(*side),
            Self::TagOutOfRange { .. } => None,
        }
    }
}
