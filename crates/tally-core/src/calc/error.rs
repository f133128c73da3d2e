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

use crate::calc::operation::BinaryOp;

/// The operation whose result overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowSource {
    /// One of the binary operations.
    Binary(BinaryOp),
    /// The accumulator of the summation probe.
    StressTest,
}

impl std::fmt::Display for OverflowSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(op) => write!(f, "{}", op),
            Self::StressTest => write!(f, "stress_test"),
        }
    }
}

/// The error type for arithmetic evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// The divisor of a division was zero.
    DivisionByZero,
    /// The result does not fit the integer type and the active
    /// policy does not allow wrapping or clamping it.
    Overflow(OverflowSource),
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Attempted to divide by zero"),
            Self::Overflow(source) => write!(f, "Integer overflow in `{}`", source),
        }
    }
}

impl std::error::Error for ArithmeticError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_division_by_zero() {
        assert_eq!(
            ArithmeticError::DivisionByZero.to_string(),
            "Attempted to divide by zero"
        );
    }

    #[test]
    fn test_display_overflow_names_the_operation() {
        let err = ArithmeticError::Overflow(OverflowSource::Binary(BinaryOp::Multiply));
        assert_eq!(err.to_string(), "Integer overflow in `multiply`");

        let err = ArithmeticError::Overflow(OverflowSource::StressTest);
        assert_eq!(err.to_string(), "Integer overflow in `stress_test`");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ArithmeticError::DivisionByZero);
        assert!(err.source().is_none());
    }
}
