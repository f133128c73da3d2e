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
//! Traits for integer-centric arithmetic. The constants and by-value
//! operation traits mirror the intrinsic methods on Rust's signed
//! primitives, so generic code can pick an overflow behavior without
//! dispatching on the concrete type.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`Zero`, `PlusOne`).
//! - `ops`: Wrapping, checked and saturating arithmetic traits (by value)
//!   for addition, subtraction, multiplication and division.
//!
//! The `SignedInteger` trait collects everything the `calc` module needs
//! from an integer type into a single bound.

pub mod constants;
pub mod ops;

use constants::{PlusOne, Zero};
use num_traits::{PrimInt, Signed};
use ops::{
    checked_arithmetic::{CheckedAddVal, CheckedDivVal, CheckedMulVal, CheckedSubVal},
    saturating_arithmetic::{
        SaturatingAddVal, SaturatingDivVal, SaturatingMulVal, SaturatingSubVal,
    },
    wrapping_arithmetic::{WrappingAddVal, WrappingDivVal, WrappingMulVal, WrappingSubVal},
};

/// Umbrella bound for the signed primitive integers the arithmetic
/// operations are defined over.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.
pub trait SignedInteger:
    PrimInt
    + Signed
    + Zero
    + PlusOne
    + WrappingAddVal
    + WrappingSubVal
    + WrappingMulVal
    + WrappingDivVal
    + CheckedAddVal
    + CheckedSubVal
    + CheckedMulVal
    + CheckedDivVal
    + SaturatingAddVal
    + SaturatingSubVal
    + SaturatingMulVal
    + SaturatingDivVal
    + std::fmt::Debug
    + std::fmt::Display
{
}

impl<T> SignedInteger for T where
    T: PrimInt
        + Signed
        + Zero
        + PlusOne
        + WrappingAddVal
        + WrappingSubVal
        + WrappingMulVal
        + WrappingDivVal
        + CheckedAddVal
        + CheckedSubVal
        + CheckedMulVal
        + CheckedDivVal
        + SaturatingAddVal
        + SaturatingSubVal
        + SaturatingMulVal
        + SaturatingDivVal
        + std::fmt::Debug
        + std::fmt::Display
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts_signed_integer<T: SignedInteger>(v: T) -> T {
        v.wrapping_add_val(T::PLUS_ONE)
    }

    #[test]
    fn test_signed_integer_covers_all_signed_primitives() {
        assert_eq!(accepts_signed_integer(1i8), 2);
        assert_eq!(accepts_signed_integer(1i16), 2);
        assert_eq!(accepts_signed_integer(1i32), 2);
        assert_eq!(accepts_signed_integer(1i64), 2);
        assert_eq!(accepts_signed_integer(1i128), 2);
        assert_eq!(accepts_signed_integer(1isize), 2);
    }
}
