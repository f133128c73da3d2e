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

//! Stateless arithmetic over signed fixed-width integers.
//!
//! These functions are the Rust counterparts of the flat C surface. Apart
//! from `divide` they cannot fail: results that leave the range of `T` wrap
//! modulo `2^BITS`.

use crate::{calc::error::ArithmeticError, num::SignedInteger};

/// Returns `a + b`, wrapping on overflow.
#[inline]
pub fn sum<T>(a: T, b: T) -> T
where
    T: SignedInteger,
{
    a.wrapping_add_val(b)
}

/// Returns `a - b`, wrapping on overflow.
#[inline]
pub fn subtract<T>(a: T, b: T) -> T
where
    T: SignedInteger,
{
    a.wrapping_sub_val(b)
}

/// Returns `a * b`, wrapping on overflow.
#[inline]
pub fn multiply<T>(a: T, b: T) -> T
where
    T: SignedInteger,
{
    a.wrapping_mul_val(b)
}

/// Returns `a / b` truncated toward zero.
///
/// `MIN / -1` wraps to `MIN`.
///
/// # Errors
///
/// Returns `ArithmeticError::DivisionByZero` if `b` is zero.
#[inline]
pub fn divide<T>(a: T, b: T) -> Result<T, ArithmeticError>
where
    T: SignedInteger,
{
    if b == T::ZERO {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a.wrapping_div_val(b))
}

/// Returns `a / b` truncated toward zero, without a recoverable error path.
///
/// # Panics
///
/// Panics if `b` is zero.
#[inline]
pub fn divide_unchecked_divisor<T>(a: T, b: T) -> T
where
    T: SignedInteger,
{
    assert!(
        b != T::ZERO,
        "called `divide_unchecked_divisor` with a zero divisor: {} / 0",
        a
    );
    a.wrapping_div_val(b)
}

/// Sums the integers `0, 1, ..., n - 1` with a counting loop, wrapping the
/// accumulator on overflow.
///
/// The loop runs `n` times; it is a throughput probe, not a closed-form
/// triangular number. Returns zero for `n <= 0`.
#[inline]
pub fn stress_test<T>(n: T) -> T
where
    T: SignedInteger,
{
    let mut acc = T::ZERO;
    let mut i = T::ZERO;
    while i < n {
        acc = acc.wrapping_add_val(i);
        i = i + T::PLUS_ONE;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const SAMPLES: usize = 10_000;

    // Reference: exact arithmetic in i64, then truncation to 32 bits.
    fn wrap32(v: i64) -> i32 {
        v as i32
    }

    fn triangular_wrapped(n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        let n = n as i64;
        wrap32(n * (n - 1) / 2)
    }

    #[test]
    fn test_example_scenarios() {
        assert_eq!(sum(2i32, 3), 5);
        assert_eq!(subtract(5i32, 3), 2);
        assert_eq!(multiply(4i32, 6), 24);
        assert_eq!(divide(10i32, 3), Ok(3));
        assert_eq!(stress_test(10i32), 45);
    }

    #[test]
    fn test_sum_wraps() {
        assert_eq!(sum(i32::MAX, 1), i32::MIN);
        assert_eq!(sum(i32::MIN, -1), i32::MAX);
        assert_eq!(sum(i32::MAX, i32::MAX), -2);
    }

    #[test]
    fn test_subtract_wraps() {
        assert_eq!(subtract(i32::MIN, 1), i32::MAX);
        assert_eq!(subtract(i32::MAX, -1), i32::MIN);
        assert_eq!(subtract(0i32, i32::MIN), i32::MIN);
    }

    #[test]
    fn test_multiply_wraps() {
        assert_eq!(multiply(65_536i32, 65_536), 0);
        assert_eq!(multiply(i32::MIN, -1), i32::MIN);
        assert_eq!(multiply(i32::MAX, 2), -2);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(divide(7i32, 2), Ok(3));
        assert_eq!(divide(-7i32, 2), Ok(-3));
        assert_eq!(divide(7i32, -2), Ok(-3));
        assert_eq!(divide(-7i32, -2), Ok(3));
        assert_eq!(divide(0i32, 5), Ok(0));
    }

    #[test]
    fn test_divide_by_zero_is_an_error() {
        assert_eq!(divide(10i32, 0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(0i32, 0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(i64::MIN, 0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_divide_min_by_minus_one_wraps() {
        assert_eq!(divide(i32::MIN, -1), Ok(i32::MIN));
        assert_eq!(divide_unchecked_divisor(i32::MIN, -1), i32::MIN);
    }

    #[test]
    #[should_panic(expected = "zero divisor")]
    fn test_divide_unchecked_divisor_panics_on_zero() {
        let _ = divide_unchecked_divisor(1i32, 0);
    }

    #[test]
    fn test_stress_test_small_values() {
        assert_eq!(stress_test(0i32), 0);
        assert_eq!(stress_test(1i32), 0);
        assert_eq!(stress_test(2i32), 1);
        assert_eq!(stress_test(5i32), 10);
        assert_eq!(stress_test(10i32), 45);
    }

    #[test]
    fn test_stress_test_non_positive_is_zero() {
        assert_eq!(stress_test(-1i32), 0);
        assert_eq!(stress_test(-1_000i32), 0);
        assert_eq!(stress_test(i32::MIN), 0);
    }

    #[test]
    fn test_stress_test_wraps_like_the_closed_form() {
        // 0 + ... + 99_999 = 4_999_950_000, beyond i32::MAX.
        for n in [65_536, 65_537, 100_000, 1_000_000] {
            assert_eq!(stress_test(n), triangular_wrapped(n), "n = {}", n);
        }
    }

    #[test]
    fn test_stress_test_other_widths() {
        assert_eq!(stress_test(5i8), 10);
        // 0 + ... + 19 = 190 wraps to -66 in i8.
        assert_eq!(stress_test(20i8), -66);
        assert_eq!(stress_test(100_000i64), 4_999_950_000);
    }

    #[test]
    fn test_random_operands_match_wide_reference() {
        let mut rng = StdRng::seed_from_u64(0x7A11_7A11);
        for _ in 0..SAMPLES {
            let a: i32 = rng.random();
            let b: i32 = rng.random();
            let (wa, wb) = (a as i64, b as i64);

            assert_eq!(sum(a, b), wrap32(wa + wb));
            assert_eq!(subtract(a, b), wrap32(wa - wb));
            assert_eq!(multiply(a, b), wrap32(wa * wb));
            if b != 0 {
                assert_eq!(divide(a, b), Ok(wrap32(wa / wb)));
            }
        }
    }
}
