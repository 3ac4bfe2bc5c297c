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

//! # Strata Core
//!
//! Discrete interval algebra over fixed-width integers. A `ClosedInterval<T>`
//! is an inclusive `[start, end]` span (or the empty interval) over any
//! integer type implementing `DiscreteDomain`, and supports point comparison,
//! union/intersection/difference, splitting at a point and bisection. Each
//! algebra operation can optionally fold one of its results back into the
//! interval it was invoked on, selected by a `ResultMutationPolicy`.
//!
//! ## Modules
//!
//! - `num`: The `DiscreteDomain` trait, implemented for the 8, 16, 32 and
//!   64-bit integers, pairing every width with a strictly wider signed type
//!   used for sizes and boundary adjustments so that no operation can
//!   overflow, not even on the full `u64` range.
//! - `math`: The `ClosedInterval<T>` value type, its ordering and point
//!   iteration, and the algebra (`combine`, `split`, `bisect`) together with
//!   the `RangeCombination` and `ResultMutationPolicy` selectors.
//! - `error`: The `IntervalError` type returned by validating constructors,
//!   bound setters and tag conversions.
//!
//! ## Example
//!
//! ```rust
//! use strata_core::math::policy::{RangeCombination, ResultMutationPolicy};
//! use strata_core::math::interval::ClosedInterval;
//!
//! let mut a = ClosedInterval::new(0, 5).unwrap();
//! let b = ClosedInterval::new(10, 15).unwrap();
//!
//! let pieces = a.combine(
//!     Some(&b),
//!     RangeCombination::Union,
//!     ResultMutationPolicy::DoNotMutateSelf,
//! );
//! assert_eq!(pieces.len(), 2);
//! assert_eq!(pieces[0], a);
//! assert_eq!(pieces[1], b);
//! ```
//!
//! Values are plain `Copy` data without interior synchronization. For an
//! interval shared between threads see the `strata-sync` crate.

pub mod error;
pub mod math;
pub mod num;
