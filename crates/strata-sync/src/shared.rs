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

//! # Shared Interval
//!
//! A `ClosedInterval<T>` behind a `parking_lot::RwLock`, for intervals that
//! several threads read and mutate.
//!
//! ## Locking contract
//!
//! - Getters (`start`, `end`, `bounds`, `is_empty`, `snapshot`) take a
//!   recursive read lock and block until it is granted. Recursive acquisition
//!   lets a thread that already holds a read lock (inside `with_read`) read
//!   again without queueing behind a waiting writer.
//! - Setters (`set_start`, `set_end`, `set_bounds`, `clear`, `replace`) take
//!   the write lock and block until it is granted.
//! - `compare_to_point` is fail-fast: it waits at most
//!   `SharedIntervalConfig::compare_timeout` for a read lock and reports
//!   `SharedIntervalError::Timeout` otherwise. Comparisons may therefore fail
//!   spuriously under contention, but never stall behind a writer.
//! - `update` holds an upgradable read lock while its closure runs on a copy
//!   of the interval, and upgrades it to the write lock only to store the
//!   result. Getters and `compare_to_point` re-enter from inside the closure.
//!   Setters and a nested `update` on the same `SharedInterval` do not, since
//!   they wait for the upgradable lock the closure is running under.
//! - Two `SharedInterval`s are independent locks with no ordering between
//!   them.
//!
//! ## Usage
//!
//! ```rust
//! use strata_core::math::interval::ClosedInterval;
//! use strata_core::math::policy::ResultMutationPolicy;
//! use strata_sync::shared::SharedInterval;
//!
//! let shared = SharedInterval::try_new(0u32, 99).unwrap();
//! shared.set_end(49).unwrap();
//!
//! let (lower, upper) = shared.update(|iv| {
//!     iv.bisect(false, ResultMutationPolicy::MutateSelfWithLowestResult)
//! });
//! assert_eq!(lower, ClosedInterval::new(0, 24).unwrap());
//! assert_eq!(upper, ClosedInterval::new(25, 49).unwrap());
//! assert_eq!(shared.snapshot(), lower);
//! ```

use crate::{config::SharedIntervalConfig, error::SharedIntervalError};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::cmp::Ordering;
use strata_core::{math::interval::ClosedInterval, num::domain::DiscreteDomain};

/// A closed interval that can be shared between threads.
#[derive(Debug)]
pub struct SharedInterval<T>
where
    T: DiscreteDomain,
{
    interval: RwLock<ClosedInterval<T>>,
    config: SharedIntervalConfig,
}

impl<T> SharedInterval<T>
where
    T: DiscreteDomain,
{
    /// Wraps `interval` using the default configuration.
    #[inline]
    pub fn new(interval: ClosedInterval<T>) -> Self {
        Self::with_config(interval, SharedIntervalConfig::default())
    }

    /// Wraps `interval` using `config`.
    #[inline]
    pub fn with_config(interval: ClosedInterval<T>, config: SharedIntervalConfig) -> Self {
        Self {
            interval: RwLock::new(interval),
            config,
        }
    }

    /// Creates a shared `[start, end]` interval.
    ///
    /// # Errors
    ///
    /// Returns `SharedIntervalError::Interval` if `start > end`.
    #[inline]
    pub fn try_new(start: T, end: T) -> Result<Self, SharedIntervalError> {
        Ok(Self::new(ClosedInterval::new(start, end)?))
    }

    /// Creates a shared empty interval.
    #[inline]
    pub fn empty() -> Self {
        Self::new(ClosedInterval::empty())
    }

    /// Returns the configuration of this interval.
    #[inline]
    pub fn config(&self) -> &SharedIntervalConfig {
        &self.config
    }

    /// Returns the start bound, or `None` if the interval is empty.
    #[inline]
    pub fn start(&self) -> Option<T> {
        self.interval.read_recursive().start()
    }

    /// Returns the end bound, or `None` if the interval is empty.
    #[inline]
    pub fn end(&self) -> Option<T> {
        self.interval.read_recursive().end()
    }

    /// Returns both bounds from a single read, or `None` if the interval is empty.
    #[inline]
    pub fn bounds(&self) -> Option<(T, T)> {
        self.interval.read_recursive().bounds()
    }

    /// Returns `true` if the interval is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.interval.read_recursive().is_empty()
    }

    /// Returns a copy of the current interval.
    #[inline]
    pub fn snapshot(&self) -> ClosedInterval<T> {
        *self.interval.read_recursive()
    }

    /// Sets the start bound.
    ///
    /// # Errors
    ///
    /// Returns `SharedIntervalError::Interval` if `ClosedInterval::set_start`
    /// rejects the bound.
    #[inline]
    pub fn set_start(&self, start: T) -> Result<(), SharedIntervalError> {
        Ok(self.interval.write().set_start(start)?)
    }

    /// Sets the end bound.
    ///
    /// # Errors
    ///
    /// Returns `SharedIntervalError::Interval` if `ClosedInterval::set_end`
    /// rejects the bound.
    #[inline]
    pub fn set_end(&self, end: T) -> Result<(), SharedIntervalError> {
        Ok(self.interval.write().set_end(end)?)
    }

    /// Replaces both bounds under one write lock.
    ///
    /// # Errors
    ///
    /// Returns `SharedIntervalError::Interval` if `start > end`.
    #[inline]
    pub fn set_bounds(&self, start: T, end: T) -> Result<(), SharedIntervalError> {
        Ok(self.interval.write().set_bounds(start, end)?)
    }

    /// Makes the interval empty.
    #[inline]
    pub fn clear(&self) {
        self.interval.write().clear();
    }

    /// Replaces the interval, returning the previous value.
    #[inline]
    pub fn replace(&self, interval: ClosedInterval<T>) -> ClosedInterval<T> {
        self.interval.write().replace(interval)
    }

    /// Locates `point` relative to the interval without waiting behind a writer.
    ///
    /// # Errors
    ///
    /// Returns `SharedIntervalError::Timeout` if no read lock was granted within
    /// the configured comparison timeout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::cmp::Ordering;
    /// # use strata_sync::shared::SharedInterval;
    /// let shared = SharedInterval::try_new(10i64, 20).unwrap();
    /// assert_eq!(shared.compare_to_point(15), Ok(Ordering::Equal));
    /// assert_eq!(shared.compare_to_point(25), Ok(Ordering::Greater));
    /// ```
    pub fn compare_to_point(&self, point: T) -> Result<Ordering, SharedIntervalError> {
        let waited = self.config.compare_timeout();
        let guard = if waited.is_zero() {
            self.interval.try_read_recursive()
        } else {
            self.interval.try_read_recursive_for(waited)
        };

        match guard {
            Some(interval) => Ok(interval.compare_to_point(point)),
            None => {
                tracing::debug!(?waited, "read lock busy, point comparison timed out");
                Err(SharedIntervalError::Timeout { waited })
            }
        }
    }

    /// Runs `f` on the interval while holding a read lock.
    #[inline]
    pub fn with_read<R>(&self, f: impl FnOnce(&ClosedInterval<T>) -> R) -> R {
        f(&self.interval.read_recursive())
    }

    /// Runs `f` on the interval and stores the result atomically.
    ///
    /// No other writer can run while `f` does, so a policy-applying algebra
    /// operation inside `f` sees and replaces one consistent value. Readers are
    /// only locked out while a changed interval is stored.
    pub fn update<R>(&self, f: impl FnOnce(&mut ClosedInterval<T>) -> R) -> R {
        let guard = self.interval.upgradable_read();
        let mut next = *guard;
        let result = f(&mut next);
        if next != *guard {
            let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
            let previous = std::mem::replace(&mut *guard, next);
            tracing::trace!(%previous, %next, "storing updated interval");
        }
        result
    }

    /// Consumes the wrapper and returns the interval.
    #[inline]
    pub fn into_inner(self) -> ClosedInterval<T> {
        self.interval.into_inner()
    }
}

impl<T> Default for SharedInterval<T>
where
    T: DiscreteDomain,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<ClosedInterval<T>> for SharedInterval<T>
where
    T: DiscreteDomain,
{
    #[inline]
    fn from(interval: ClosedInterval<T>) -> Self {
        Self::new(interval)
    }
}

impl<T> std::fmt::Display for SharedInterval<T>
where
    T: DiscreteDomain,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SharedInterval({})", self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::{Arc, Barrier},
        thread,
        time::Duration,
    };
    use strata_core::{
        error::{BoundSide, IntervalError},
        math::policy::{RangeCombination, ResultMutationPolicy},
    };

    #[test]
    fn test_getters_and_setters() {
        let shared = SharedInterval::try_new(0i32, 10).unwrap();
        assert_eq!(shared.start(), Some(0));
        assert_eq!(shared.end(), Some(10));

        shared.set_start(5).unwrap();
        shared.set_end(7).unwrap();
        assert_eq!(shared.bounds(), Some((5, 7)));

        assert!(matches!(
            shared.set_start(8),
            Err(SharedIntervalError::Interval(err)) if err.side() == Some(BoundSide::Start)
        ));
        assert!(matches!(
            shared.set_end(4),
            Err(SharedIntervalError::Interval(err)) if err.side() == Some(BoundSide::End)
        ));
        assert_eq!(shared.bounds(), Some((5, 7)));
    }

    #[test]
    fn test_try_new_invalid() {
        assert!(matches!(
            SharedInterval::try_new(3u8, 2),
            Err(SharedIntervalError::Interval(IntervalError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_clear_and_set_bounds() {
        let shared = SharedInterval::try_new(1u64, 2).unwrap();
        shared.clear();
        assert!(shared.is_empty());
        assert_eq!(
            shared.set_start(0),
            Err(SharedIntervalError::Interval(IntervalError::NoBounds {
                side: BoundSide::Start
            }))
        );

        shared.set_bounds(10, 20).unwrap();
        assert_eq!(shared.snapshot(), ClosedInterval::new(10, 20).unwrap());

        let previous = shared.replace(ClosedInterval::singleton(3));
        assert_eq!(previous, ClosedInterval::new(10, 20).unwrap());
        assert_eq!(shared.into_inner(), ClosedInterval::singleton(3));
    }

    #[test]
    fn test_default_and_display() {
        let shared = SharedInterval::<i16>::default();
        assert!(shared.is_empty());
        assert_eq!(shared.to_string(), "SharedInterval(∅)");

        let shared = SharedInterval::from(ClosedInterval::new(-1i16, 1).unwrap());
        assert_eq!(shared.to_string(), "SharedInterval([-1, 1])");
    }

    #[test]
    fn test_compare_to_point() {
        let shared = SharedInterval::try_new(10i64, 20).unwrap();
        assert_eq!(shared.compare_to_point(9), Ok(Ordering::Less));
        assert_eq!(shared.compare_to_point(10), Ok(Ordering::Equal));
        assert_eq!(shared.compare_to_point(21), Ok(Ordering::Greater));

        shared.clear();
        assert_eq!(shared.compare_to_point(0), Ok(Ordering::Greater));
    }

    #[test]
    fn test_compare_to_point_times_out_under_write_lock() {
        let shared = SharedInterval::try_new(0i32, 10).unwrap();
        let writer = shared.interval.write();
        let result = shared.compare_to_point(5);
        drop(writer);
        assert_eq!(
            result,
            Err(SharedIntervalError::Timeout {
                waited: SharedIntervalConfig::DEFAULT_COMPARE_TIMEOUT
            })
        );
        // The blocking path is unaffected once the writer is gone.
        assert_eq!(shared.compare_to_point(5), Ok(Ordering::Equal));
    }

    #[test]
    fn test_non_blocking_compare_times_out_immediately() {
        let shared = SharedInterval::with_config(
            ClosedInterval::new(0u8, 10).unwrap(),
            SharedIntervalConfig::non_blocking(),
        );
        let writer = shared.interval.write();
        let result = shared.compare_to_point(5);
        drop(writer);
        assert_eq!(
            result,
            Err(SharedIntervalError::Timeout {
                waited: Duration::ZERO
            })
        );
    }

    #[test]
    fn test_compare_within_read_lock_is_recursive() {
        let shared = SharedInterval::try_new(0i32, 10).unwrap();
        let result = shared.with_read(|iv| {
            assert_eq!(iv.bounds(), Some((0, 10)));
            (shared.start(), shared.compare_to_point(3))
        });
        assert_eq!(result, (Some(0), Ok(Ordering::Equal)));
    }

    #[test]
    fn test_timeout_against_writer_in_other_thread() {
        let shared = Arc::new(SharedInterval::try_new(0i32, 10).unwrap());
        let locked = Arc::new(Barrier::new(2));
        let checked = Arc::new(Barrier::new(2));

        let writer = {
            let shared = Arc::clone(&shared);
            let locked = Arc::clone(&locked);
            let checked = Arc::clone(&checked);
            thread::spawn(move || {
                let mut guard = shared.interval.write();
                locked.wait();
                checked.wait();
                guard.set_end(20)
            })
        };

        locked.wait();
        let result = shared.compare_to_point(15);
        checked.wait();
        writer.join().unwrap().unwrap();

        assert!(result.unwrap_err().is_timeout());
        assert_eq!(shared.compare_to_point(15), Ok(Ordering::Equal));
    }

    #[test]
    fn test_getter_waits_for_writer_in_other_thread() {
        let shared = Arc::new(SharedInterval::try_new(0u32, 10).unwrap());
        let locked = Arc::new(Barrier::new(2));

        let writer = {
            let shared = Arc::clone(&shared);
            let locked = Arc::clone(&locked);
            thread::spawn(move || {
                let mut guard = shared.interval.write();
                locked.wait();
                thread::sleep(Duration::from_millis(20));
                guard.set_bounds(40, 50)
            })
        };

        locked.wait();
        // Blocks past the comparison timeout and observes the finished write.
        assert_eq!(shared.bounds(), Some((40, 50)));
        assert_eq!(shared.snapshot(), ClosedInterval::new(40, 50).unwrap());
        writer.join().unwrap().unwrap();
    }

    #[test]
    fn test_getters_reenter_inside_update() {
        let shared = SharedInterval::try_new(0i32, 10).unwrap();
        let seen = shared.update(|iv| {
            let before = (shared.start(), shared.bounds(), shared.compare_to_point(3));
            iv.set_end(5).unwrap();
            let during = shared.with_read(|current| current.end());
            (before, during)
        });
        assert_eq!(seen.0, (Some(0), Some((0, 10)), Ok(Ordering::Equal)));
        // Readers see the stored value until the closure returns.
        assert_eq!(seen.1, Some(10));
        assert_eq!(shared.bounds(), Some((0, 5)));
    }

    #[test]
    fn test_getter_inside_update_on_worker_thread_returns() {
        let shared = Arc::new(SharedInterval::try_new(1i64, 2).unwrap());
        let (tx, rx) = std::sync::mpsc::channel();
        {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let start = shared.update(|_| shared.start());
                let _ = tx.send(start);
            });
        }
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(Some(1)));
    }

    #[test]
    fn test_update_without_change_keeps_value() {
        let shared = SharedInterval::try_new(0u8, 9).unwrap();
        let size = shared.update(|iv| iv.range_size());
        assert_eq!(size, 10);
        assert_eq!(shared.bounds(), Some((0, 9)));
    }

    #[test]
    fn test_update_runs_algebra_atomically() {
        let shared = SharedInterval::try_new(0i32, 9).unwrap();
        let other = ClosedInterval::new(5, 15).unwrap();
        let pieces = shared.update(|iv| {
            iv.combine(
                Some(&other),
                RangeCombination::Difference,
                ResultMutationPolicy::MutateSelfWithHighestResult,
            )
        });
        assert_eq!(pieces.len(), 2);
        assert_eq!(shared.snapshot(), ClosedInterval::new(10, 15).unwrap());
    }

    #[test]
    fn test_concurrent_writers_keep_invariant() {
        let shared = Arc::new(SharedInterval::try_new(0i64, 1_000).unwrap());

        thread::scope(|scope| {
            for worker in 0..4i64 {
                let shared = Arc::clone(&shared);
                scope.spawn(move || {
                    for step in 0..500i64 {
                        let start = (worker * 37 + step) % 500;
                        shared.set_bounds(start, start + step).unwrap();
                        // Single bound writes may be rejected by a concurrent
                        // narrower interval; the interval stays valid either way.
                        let _ = shared.set_end(start);
                    }
                });
            }

            for _ in 0..2 {
                let shared = Arc::clone(&shared);
                scope.spawn(move || {
                    for _ in 0..2_000 {
                        if let Some((start, end)) = shared.bounds() {
                            assert!(start <= end);
                        }
                        match shared.compare_to_point(250) {
                            Ok(_) => {}
                            Err(err) => assert!(err.is_timeout()),
                        }
                    }
                });
            }
        });

        let (start, end) = shared.bounds().unwrap();
        assert!(start <= end);
    }
}
