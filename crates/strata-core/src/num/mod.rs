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

//! # Numeric Foundations
//!
//! The value domain an interval ranges over. `DiscreteDomain` collects the
//! integer capabilities the interval algebra needs (total order, minimum and
//! maximum, unit stepping) and pairs every integer width with a strictly
//! wider signed type for arithmetic that could leave the domain.
//!
//! ## Submodules
//!
//! - `domain`: The `DiscreteDomain` trait and its implementations for
//!   `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64` and `u64`.
//!
//! ## Motivation
//!
//! Interval bounds are routinely nudged by one (`start - 1`, `end + 1`) and
//! sizes span up to `2^64` values. Doing that arithmetic in the widened type
//! keeps one generic implementation correct for every width instead of
//! repeating overflow guards per type.

pub mod domain;
