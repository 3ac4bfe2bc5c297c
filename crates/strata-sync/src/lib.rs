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

//! # Strata Sync
//!
//! Shared-mode access to `strata_core` intervals. `SharedInterval<T>` places a
//! `ClosedInterval<T>` behind a reader/writer lock so one interval can be read
//! and mutated from several threads.
//!
//! ## Modules
//!
//! - `shared`: The `SharedInterval<T>` wrapper. Getters take a recursive read
//!   lock and setters a write lock, each held only for the single access.
//!   Point comparison is fail-fast: it gives up after a short, configurable
//!   timeout instead of waiting behind a writer.
//! - `config`: `SharedIntervalConfig`, the comparison timeout.
//! - `error`: `SharedIntervalError`, adding the timeout condition to the
//!   interval errors of `strata_core`.
//!
//! ## Coordination
//!
//! The algebra (`combine`, `split`, `bisect`) reads both bounds of one or two
//! intervals and is not synchronized by itself. Run it on a `snapshot()` and
//! store the result, or run it inside `update` to keep other writers out for
//! the whole operation.

pub mod config;
pub mod error;
pub mod shared;
