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

//! The binary operations of the arithmetic surface and their names.
//!
//! Every operation answers to its short name (`"sum"`) and to the command name
//! the host application registers for it (`"calculate_sum"`). Parsing is exact
//! and case-sensitive; `Display` always produces the short name.

use std::str::FromStr;

/// A two-operand arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `a + b`
    Sum,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, truncating toward zero.
    Divide,
}

impl BinaryOp {
    /// All operations, in declaration order.
    pub const ALL: [BinaryOp; 4] = [
        BinaryOp::Sum,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
    ];

    /// Returns the short name of the operation.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Returns the host command name of the operation.
    #[inline]
    pub fn command_name(&self) -> &'static str {
        match self {
            Self::Sum => "calculate_sum",
            Self::Subtract => "calculate_subtract",
            Self::Multiply => "calculate_multiply",
            Self::Divide => "calculate_divide",
        }
    }

    /// Returns `true` if the operation can fail regardless of the
    /// overflow policy.
    #[inline]
    pub fn is_fallible(&self) -> bool {
        matches!(self, Self::Divide)
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string names no known operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBinaryOpError {
    /// The string that failed to parse.
    pub name: String,
}

impl std::fmt::Display for ParseBinaryOpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown arithmetic operation '{}'", self.name)
    }
}

impl std::error::Error for ParseBinaryOpError {}

impl FromStr for BinaryOp {
    type Err = ParseBinaryOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s || op.command_name() == s)
            .ok_or_else(|| ParseBinaryOpError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse_agree() {
        for op in BinaryOp::ALL {
            assert_eq!(op.to_string().parse::<BinaryOp>(), Ok(op));
        }
    }

    #[test]
    fn test_parse_command_names() {
        assert_eq!("calculate_sum".parse::<BinaryOp>(), Ok(BinaryOp::Sum));
        assert_eq!("calculate_subtract".parse::<BinaryOp>(), Ok(BinaryOp::Subtract));
        assert_eq!("calculate_multiply".parse::<BinaryOp>(), Ok(BinaryOp::Multiply));
        assert_eq!("calculate_divide".parse::<BinaryOp>(), Ok(BinaryOp::Divide));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Sum".parse::<BinaryOp>().unwrap_err();
        assert_eq!(err.name, "Sum");
        assert_eq!(err.to_string(), "Unknown arithmetic operation 'Sum'");
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert!("modulo".parse::<BinaryOp>().is_err());
        assert!("".parse::<BinaryOp>().is_err());
        assert!("run_stress_test".parse::<BinaryOp>().is_err());
    }

    #[test]
    fn test_only_divide_is_fallible() {
        assert!(BinaryOp::Divide.is_fallible());
        assert!(!BinaryOp::Sum.is_fallible());
        assert!(!BinaryOp::Subtract.is_fallible());
        assert!(!BinaryOp::Multiply.is_fallible());
    }
}
