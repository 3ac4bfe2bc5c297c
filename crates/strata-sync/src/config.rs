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

//! Configuration for shared intervals.

use std::time::Duration;

/// Tunables of a `SharedInterval`.
///
/// # Examples
///
/// ```rust
/// # use std::time::Duration;
/// # use strata_sync::config::SharedIntervalConfig;
/// let config = SharedIntervalConfig::default().with_compare_timeout(Duration::from_micros(50));
/// assert_eq!(config.compare_timeout(), Duration::from_micros(50));
/// assert!(SharedIntervalConfig::non_blocking().compare_timeout().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SharedIntervalConfig {
    compare_timeout: Duration,
}

impl SharedIntervalConfig {
    /// How long `compare_to_point` waits for a read lock by default.
    pub const DEFAULT_COMPARE_TIMEOUT: Duration = Duration::from_millis(1);

    /// Creates the default configuration.
    #[inline]
    pub const fn new() -> Self {
        Self {
            compare_timeout: Self::DEFAULT_COMPARE_TIMEOUT,
        }
    }

    /// Creates a configuration whose comparisons never wait for the lock.
    #[inline]
    pub const fn non_blocking() -> Self {
        Self {
            compare_timeout: Duration::ZERO,
        }
    }

    /// Sets how long `compare_to_point` waits for a read lock before it fails.
    #[inline]
    pub const fn with_compare_timeout(mut self, timeout: Duration) -> Self {
        self.compare_timeout = timeout;
        self
    }

    /// Returns how long `compare_to_point` waits for a read lock.
    #[inline]
    pub const fn compare_timeout(&self) -> Duration {
        self.compare_timeout
    }
}

impl Default for SharedIntervalConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
