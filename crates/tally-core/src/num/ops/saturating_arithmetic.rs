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

use core::ops::{Add, Div, Mul, Sub};

macro_rules! saturating_impl_val {
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

/// Saturating addition by value. Results beyond the type bounds are clamped
/// to `MIN` or `MAX`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::saturating_arithmetic::SaturatingAddVal;
/// assert_eq!(i32::MAX.saturating_add_val(1), i32::MAX);
/// assert_eq!(i32::MIN.saturating_add_val(-1), i32::MIN);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

saturating_impl_val!(
    SaturatingAddVal, saturating_add_val, saturating_add;
    i8, i16, i32, i64, i128, isize
);

/// Saturating subtraction by value.
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value.
    fn saturating_sub_val(self, v: Self) -> Self;
}

saturating_impl_val!(
    SaturatingSubVal, saturating_sub_val, saturating_sub;
    i8, i16, i32, i64, i128, isize
);

/// Saturating multiplication by value.
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs saturating multiplication by value.
    fn saturating_mul_val(self, v: Self) -> Self;
}

saturating_impl_val!(
    SaturatingMulVal, saturating_mul_val, saturating_mul;
    i8, i16, i32, i64, i128, isize
);

/// Saturating division by value. `MIN / -1` clamps to `MAX`.
///
/// # Panics
///
/// Panics if the divisor is zero.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::saturating_arithmetic::SaturatingDivVal;
/// assert_eq!(i32::MIN.saturating_div_val(-1), i32::MAX);
/// assert_eq!(10i32.saturating_div_val(3), 3);
/// ```
pub trait SaturatingDivVal: Sized + Div<Self, Output = Self> {
    /// Performs saturating division by value.
    fn saturating_div_val(self, v: Self) -> Self;
}

saturating_impl_val!(
    SaturatingDivVal, saturating_div_val, saturating_div;
    i8, i16, i32, i64, i128, isize
);
