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

//! Policy-driven evaluation of the arithmetic operations.
//!
//! A `Calculator` evaluates a `BinaryOp` or the summation probe under a fixed
//! `OverflowPolicy`:
//!
//! - `Wrapping` produces exactly the results of the free functions in
//!   `calc::ops`.
//! - `Checked` turns any overflow into `ArithmeticError::Overflow`.
//! - `Saturating` clamps results to the bounds of `T`.
//!
//! A zero divisor is an `ArithmeticError::DivisionByZero` under every policy.
//! The calculator counts its evaluations and failures; the counters are
//! per-instance and never shared.

use crate::{
    calc::{
        error::{ArithmeticError, OverflowSource},
        operation::BinaryOp,
        ops,
        policy::OverflowPolicy,
    },
    num::SignedInteger,
};
use std::marker::PhantomData;

/// Counters collected by a `Calculator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalculatorStatistics {
    /// Number of evaluations, successful or not.
    pub evaluations: u64,
    /// Number of evaluations that returned an error.
    pub failures: u64,
}

impl CalculatorStatistics {
    /// Number of evaluations that produced a value.
    #[inline]
    pub fn successes(&self) -> u64 {
        self.evaluations - self.failures
    }
}

impl std::fmt::Display for CalculatorStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Calculator Statistics:")?;
        writeln!(f, "  Evaluations: {}", self.evaluations)?;
        writeln!(f, "  Successes: {}", self.successes())?;
        writeln!(f, "  Failures: {}", self.failures)
    }
}

/// Evaluates arithmetic operations over `T` under an `OverflowPolicy`.
#[derive(Debug, Clone)]
pub struct Calculator<T> {
    policy: OverflowPolicy,
    statistics: CalculatorStatistics,
    _marker: PhantomData<T>,
}

impl<T> Default for Calculator<T>
where
    T: SignedInteger,
{
    fn default() -> Self {
        Self::new(OverflowPolicy::default())
    }
}

impl<T> Calculator<T>
where
    T: SignedInteger,
{
    /// Creates a new `Calculator` with the given overflow policy.
    #[inline]
    pub fn new(policy: OverflowPolicy) -> Self {
        Self {
            policy,
            statistics: CalculatorStatistics::default(),
            _marker: PhantomData,
        }
    }

    /// Returns the overflow policy of this calculator.
    #[inline]
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Returns the statistics collected so far.
    #[inline]
    pub fn statistics(&self) -> &CalculatorStatistics {
        &self.statistics
    }

    /// Resets all counters to zero.
    #[inline]
    pub fn reset_statistics(&mut self) {
        self.statistics = CalculatorStatistics::default();
    }

    /// Evaluates `a <op> b`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` for a zero divisor, and
    /// `ArithmeticError::Overflow` if the policy is `Checked` and the result
    /// does not fit `T`.
    pub fn apply(&mut self, op: BinaryOp, a: T, b: T) -> Result<T, ArithmeticError> {
        let result = self.evaluate(op, a, b);
        self.record(&result);
        match &result {
            Ok(value) => log::trace!("{} {} {} = {} ({})", op, a, b, value, self.policy),
            Err(err) => log::debug!("{} {} {} failed: {} ({})", op, a, b, err, self.policy),
        }
        result
    }

    /// Sums `0, 1, ..., n - 1` with the accumulator governed by the policy.
    /// Returns zero for `n <= 0`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the policy is `Checked` and the
    /// accumulator leaves the range of `T`.
    pub fn stress_test(&mut self, n: T) -> Result<T, ArithmeticError> {
        let result = self.accumulate(n);
        self.record(&result);
        match &result {
            Ok(value) => log::trace!("stress_test {} = {} ({})", n, value, self.policy),
            Err(err) => log::debug!("stress_test {} failed: {} ({})", n, err, self.policy),
        }
        result
    }

    #[inline]
    fn record(&mut self, result: &Result<T, ArithmeticError>) {
        self.statistics.evaluations += 1;
        if result.is_err() {
            self.statistics.failures += 1;
        }
    }

    fn evaluate(&self, op: BinaryOp, a: T, b: T) -> Result<T, ArithmeticError> {
        if op.is_fallible() && b == T::ZERO {
            return Err(ArithmeticError::DivisionByZero);
        }

        match self.policy {
            OverflowPolicy::Wrapping => Ok(match op {
                BinaryOp::Sum => a.wrapping_add_val(b),
                BinaryOp::Subtract => a.wrapping_sub_val(b),
                BinaryOp::Multiply => a.wrapping_mul_val(b),
                BinaryOp::Divide => a.wrapping_div_val(b),
            }),
            OverflowPolicy::Checked => match op {
                BinaryOp::Sum => a.checked_add_val(b),
                BinaryOp::Subtract => a.checked_sub_val(b),
                BinaryOp::Multiply => a.checked_mul_val(b),
                BinaryOp::Divide => a.checked_div_val(b),
            }
            .ok_or(ArithmeticError::Overflow(OverflowSource::Binary(op))),
            OverflowPolicy::Saturating => Ok(match op {
                BinaryOp::Sum => a.saturating_add_val(b),
                BinaryOp::Subtract => a.saturating_sub_val(b),
                BinaryOp::Multiply => a.saturating_mul_val(b),
                BinaryOp::Divide => a.saturating_div_val(b),
            }),
        }
    }

    fn accumulate(&self, n: T) -> Result<T, ArithmeticError> {
        match self.policy {
            OverflowPolicy::Wrapping => Ok(ops::stress_test(n)),
            OverflowPolicy::Checked => {
                let mut acc = T::ZERO;
                let mut i = T::ZERO;
                while i < n {
                    acc = acc
                        .checked_add_val(i)
                        .ok_or(ArithmeticError::Overflow(OverflowSource::StressTest))?;
                    i = i + T::PLUS_ONE;
                }
                Ok(acc)
            }
            OverflowPolicy::Saturating => {
                let mut acc = T::ZERO;
                let mut i = T::ZERO;
                while i < n {
                    acc = acc.saturating_add_val(i);
                    i = i + T::PLUS_ONE;
                }
                Ok(acc)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn wrapping() -> Calculator<i32> {
        Calculator::new(OverflowPolicy::Wrapping)
    }

    fn checked() -> Calculator<i32> {
        Calculator::new(OverflowPolicy::Checked)
    }

    fn saturating() -> Calculator<i32> {
        Calculator::new(OverflowPolicy::Saturating)
    }

    #[test]
    fn test_default_calculator_wraps() {
        let calc = Calculator::<i32>::default();
        assert_eq!(calc.policy(), OverflowPolicy::Wrapping);
        assert_eq!(calc.statistics(), &CalculatorStatistics::default());
    }

    #[test]
    fn test_example_scenarios_under_every_policy() {
        for mut calc in [wrapping(), checked(), saturating()] {
            assert_eq!(calc.apply(BinaryOp::Sum, 2, 3), Ok(5));
            assert_eq!(calc.apply(BinaryOp::Subtract, 5, 3), Ok(2));
            assert_eq!(calc.apply(BinaryOp::Multiply, 4, 6), Ok(24));
            assert_eq!(calc.apply(BinaryOp::Divide, 10, 3), Ok(3));
            assert_eq!(calc.stress_test(10), Ok(45));
        }
    }

    #[test]
    fn test_division_by_zero_fails_under_every_policy() {
        for mut calc in [wrapping(), checked(), saturating()] {
            assert_eq!(
                calc.apply(BinaryOp::Divide, 1, 0),
                Err(ArithmeticError::DivisionByZero)
            );
        }
    }

    #[test]
    fn test_wrapping_policy_matches_free_functions() {
        let mut calc = wrapping();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1_000 {
            let a: i32 = rng.random();
            let b: i32 = rng.random();
            assert_eq!(calc.apply(BinaryOp::Sum, a, b), Ok(ops::sum(a, b)));
            assert_eq!(calc.apply(BinaryOp::Subtract, a, b), Ok(ops::subtract(a, b)));
            assert_eq!(calc.apply(BinaryOp::Multiply, a, b), Ok(ops::multiply(a, b)));
            assert_eq!(calc.apply(BinaryOp::Divide, a, b), ops::divide(a, b));
        }
    }

    #[test]
    fn test_checked_policy_reports_overflow() {
        let mut calc = checked();
        assert_eq!(
            calc.apply(BinaryOp::Sum, i32::MAX, 1),
            Err(ArithmeticError::Overflow(OverflowSource::Binary(BinaryOp::Sum)))
        );
        assert_eq!(
            calc.apply(BinaryOp::Subtract, i32::MIN, 1),
            Err(ArithmeticError::Overflow(OverflowSource::Binary(
                BinaryOp::Subtract
            )))
        );
        assert_eq!(
            calc.apply(BinaryOp::Multiply, 65_536, 65_536),
            Err(ArithmeticError::Overflow(OverflowSource::Binary(
                BinaryOp::Multiply
            )))
        );
        assert_eq!(
            calc.apply(BinaryOp::Divide, i32::MIN, -1),
            Err(ArithmeticError::Overflow(OverflowSource::Binary(
                BinaryOp::Divide
            )))
        );
    }

    #[test]
    fn test_checked_policy_overflows_exactly_outside_range() {
        let mut calc = checked();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            let a: i32 = rng.random();
            let b: i32 = rng.random();
            let wide = a as i64 + b as i64;
            let fits = wide >= i32::MIN as i64 && wide <= i32::MAX as i64;
            assert_eq!(calc.apply(BinaryOp::Sum, a, b).is_ok(), fits);
        }
    }

    #[test]
    fn test_saturating_policy_clamps() {
        let mut calc = saturating();
        assert_eq!(calc.apply(BinaryOp::Sum, i32::MAX, 1), Ok(i32::MAX));
        assert_eq!(calc.apply(BinaryOp::Subtract, i32::MIN, 1), Ok(i32::MIN));
        assert_eq!(calc.apply(BinaryOp::Multiply, i32::MIN, 2), Ok(i32::MIN));
        assert_eq!(calc.apply(BinaryOp::Divide, i32::MIN, -1), Ok(i32::MAX));
    }

    #[test]
    fn test_stress_test_boundary_under_checked_policy() {
        let mut calc = checked();
        // 0 + ... + 65_535 = 2_147_450_880 still fits an i32.
        assert_eq!(calc.stress_test(65_536), Ok(2_147_450_880));
        assert_eq!(
            calc.stress_test(65_537),
            Err(ArithmeticError::Overflow(OverflowSource::StressTest))
        );
    }

    #[test]
    fn test_stress_test_under_saturating_policy() {
        let mut calc = saturating();
        assert_eq!(calc.stress_test(65_536), Ok(2_147_450_880));
        assert_eq!(calc.stress_test(100_000), Ok(i32::MAX));
    }

    #[test]
    fn test_stress_test_non_positive_under_every_policy() {
        for mut calc in [wrapping(), checked(), saturating()] {
            assert_eq!(calc.stress_test(0), Ok(0));
            assert_eq!(calc.stress_test(-5), Ok(0));
        }
    }

    #[test]
    fn test_statistics_count_evaluations_and_failures() {
        let mut calc = checked();
        let _ = calc.apply(BinaryOp::Sum, 1, 1);
        let _ = calc.apply(BinaryOp::Divide, 1, 0);
        let _ = calc.apply(BinaryOp::Sum, i32::MAX, 1);
        let _ = calc.stress_test(3);

        let stats = calc.statistics();
        assert_eq!(stats.evaluations, 4);
        assert_eq!(stats.failures, 2);
        assert_eq!(stats.successes(), 2);

        calc.reset_statistics();
        assert_eq!(calc.statistics(), &CalculatorStatistics::default());
    }

    #[test]
    fn test_statistics_display() {
        let stats = CalculatorStatistics {
            evaluations: 3,
            failures: 1,
        };
        let output = format!("{}", stats);
        assert!(output.contains("Evaluations: 3"));
        assert!(output.contains("Successes: 2"));
        assert!(output.contains("Failures: 1"));
    }

    #[test]
    fn test_generic_over_width() {
        let mut calc = Calculator::<i8>::new(OverflowPolicy::Checked);
        assert_eq!(
            calc.apply(BinaryOp::Sum, 100, 100),
            Err(ArithmeticError::Overflow(OverflowSource::Binary(BinaryOp::Sum)))
        );
        let mut calc = Calculator::<i64>::new(OverflowPolicy::Checked);
        assert_eq!(calc.apply(BinaryOp::Sum, 100, 100), Ok(200));
    }
}
