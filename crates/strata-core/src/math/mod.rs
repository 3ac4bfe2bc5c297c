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

//! # Interval Math
//!
//! Inclusive interval primitives over ordered discrete domains and the algebra
//! built on top of them.
//!
//! ## Submodules
//!
//! - `interval`: The `ClosedInterval<T>` value type: an inclusive `[start, end]`
//!   span or the empty interval, with validating bound setters, point
//!   comparison, overflow-free sizing, total ordering and point iteration.
//! - `policy`: The `RangeCombination` selector for `combine` and the
//!   `ResultMutationPolicy` that decides whether an operation writes one of its
//!   results back into the interval it was invoked on.
//! - `algebra`: `combine` (difference/union/intersection), `split` at a point
//!   and `bisect`, each in a pure form and a policy-applying form.
//!
//! ## Motivation
//!
//! Inclusive bounds can reach both ends of the integer domain, so the empty
//! interval cannot be encoded as `start == end` the way half-open intervals do
//! it. It is a separate state of the type instead, and every boundary step is
//! done in the domain's widened type.

pub mod algebra;
pub mod interval;
pub mod policy;
