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

//! Two's-complement wraparound arithmetic by value.
//!
//! These traits give the flat arithmetic surface its semantics: results that
//! exceed the range of the type wrap modulo `2^BITS`.

use core::ops::{Add, Div, Mul, Sub};

macro_rules! wrapping_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),* $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> $t {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

/// Wrapping addition by value.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::wrapping_arithmetic::WrappingAddVal;
/// assert_eq!(i32::MAX.wrapping_add_val(1), i32::MIN);
/// assert_eq!(2i32.wrapping_add_val(3), 5);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

wrapping_impl_val!(WrappingAddVal, wrapping_add_val, wrapping_add; i8, i16, i32, i64, i128, isize);

/// Wrapping subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::wrapping_arithmetic::WrappingSubVal;
/// assert_eq!(i32::MIN.wrapping_sub_val(1), i32::MAX);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, wrapping_sub; i8, i16, i32, i64, i128, isize);

/// Wrapping multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::wrapping_arithmetic::WrappingMulVal;
/// assert_eq!(65_536i32.wrapping_mul_val(65_536), 0);
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs wrapping multiplication by value.
    fn wrapping_mul_val(self, v: Self) -> Self;
}

wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, wrapping_mul; i8, i16, i32, i64, i128, isize);

/// Wrapping division by value. Truncates toward zero; `MIN / -1` wraps to
/// `MIN`.
///
/// # Panics
///
/// Panics if the divisor is zero.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::wrapping_arithmetic::WrappingDivVal;
/// assert_eq!(i32::MIN.wrapping_div_val(-1), i32::MIN);
/// assert_eq!((-7i32).wrapping_div_val(2), -3);
/// ```
pub trait WrappingDivVal: Sized + Div<Self, Output = Self> {
    /// Performs wrapping division by value.
    fn wrapping_div_val(self, v: Self) -> Self;
}

wrapping_impl_val!(WrappingDivVal, wrapping_div_val, wrapping_div; i8, i16, i32, i64, i128, isize);
