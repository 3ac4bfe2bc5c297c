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

use std::time::Duration;
use strata_core::error::IntervalError;
use thiserror::Error;

/// The error type for operations on a `SharedInterval`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharedIntervalError {
    /// The requested interval state is invalid.
    #[error(transparent)]
    Interval(#[from] IntervalError),

    /// The read lock could not be acquired because the interval is being written.
    ///
    /// The comparison can be retried, or the value read through a blocking
    /// accessor such as `snapshot`.
    #[error("interval is being modified; read lock not acquired within {waited:?}")]
    Timeout { waited: Duration },
}

impl SharedIntervalError {
    /// Returns `true` for the lock timeout condition.
    #[inline]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
