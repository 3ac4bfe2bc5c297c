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

use num_traits::{PrimInt, Signed};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// An ordered discrete value domain that intervals can range over.
///
/// Besides the intrinsic integer capabilities of `PrimInt`, every domain names
/// a signed `Wide` type that is strictly wider than itself. The interval algebra
/// performs all size computations and boundary adjustments in that type, so
/// expressions like `MIN - 1`, `MAX + 1` or the size of the full `u64` range
/// (`2^64`) never overflow.
///
/// # Examples
///
/// ```rust
/// # use strata_core::num::domain::DiscreteDomain;
/// assert_eq!(u8::DOMAIN_MAX.widen() + 1, 256i16);
/// assert_eq!(<u8 as DiscreteDomain>::narrow(256), None);
/// assert_eq!(i8::DOMAIN_MIN.predecessor(), None);
/// assert_eq!(41i32.successor(), Some(42));
/// ```
pub trait DiscreteDomain:
    PrimInt + Default + Hash + Debug + Display + Send + Sync + 'static
{
    /// A signed integer type with strictly greater range than `Self`.
    type Wide: PrimInt + Signed + Hash + Debug + Display + Send + Sync + 'static;

    /// The smallest representable value of the domain.
    const DOMAIN_MIN: Self;

    /// The largest representable value of the domain.
    const DOMAIN_MAX: Self;

    /// Losslessly converts the value into the widened type.
    fn widen(self) -> Self::Wide;

    /// Converts a widened value back into the domain.
    ///
    /// Returns `None` if `wide` lies outside `[DOMAIN_MIN, DOMAIN_MAX]`.
    fn narrow(wide: Self::Wide) -> Option<Self>;

    /// Converts a widened value back into the domain without checking the
    /// bounds in release builds.
    ///
    /// The caller must ensure `wide` lies within `[DOMAIN_MIN, DOMAIN_MAX]`.
    /// This function contains a `debug_assert!` to catch errors during development.
    fn narrow_unchecked(wide: Self::Wide) -> Self;

    /// Returns the next value of the domain, or `None` at `DOMAIN_MAX`.
    #[inline]
    fn successor(self) -> Option<Self> {
        self.checked_add(&Self::one())
    }

    /// Returns the previous value of the domain, or `None` at `DOMAIN_MIN`.
    #[inline]
    fn predecessor(self) -> Option<Self> {
        self.checked_sub(&Self::one())
    }
}

macro_rules! impl_discrete_domain_for {
    ($t:ty, $wide:ty) => {
        impl DiscreteDomain for $t {
            type Wide = $wide;

            const DOMAIN_MIN: Self = <$t>::MIN;
            const DOMAIN_MAX: Self = <$t>::MAX;

            #[inline(always)]
            fn widen(self) -> $wide {
                <$wide>::from(self)
            }

            #[inline(always)]
            fn narrow(wide: $wide) -> Option<$t> {
                <$t>::try_from(wide).ok()
            }

            #[inline(always)]
            fn narrow_unchecked(wide: $wide) -> $t {
                debug_assert!(
                    <$t>::try_from(wide).is_ok(),
                    "Value out of domain: {} does not fit into {}",
                    wide,
                    stringify!($t)
                );
                wide as $t
            }
        }
    };
}

impl_discrete_domain_for!(i8, i16);
impl_discrete_domain_for!(u8, i16);
impl_discrete_domain_for!(i16, i32);
impl_discrete_domain_for!(u16, i32);
impl_discrete_domain_for!(i32, i64);
impl_discrete_domain_for!(u32, i64);
impl_discrete_domain_for!(i64, i128);
impl_discrete_domain_for!(u64, i128);
