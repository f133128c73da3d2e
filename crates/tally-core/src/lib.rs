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

//! # Tally Core
//!
//! Fixed-width signed integer arithmetic for the Tally native bridge. The
//! crate provides the five operations the host application calls into
//! (`sum`, `subtract`, `multiply`, `divide`, and the `stress_test` summation
//! probe) together with the numeric traits they are built on.
//!
//! ## Modules
//!
//! - `num`: Associated-constant traits (`Zero`, `PlusOne`) and by-value
//!   arithmetic traits for wrapping, checked (`Option<T>`) and saturating
//!   operations, bundled by the `SignedInteger` umbrella trait.
//! - `calc`: The operations themselves. Free functions with two's-complement
//!   wraparound semantics, the `BinaryOp` and `OverflowPolicy` enums, the
//!   policy-driven `Calculator`, and the `ArithmeticError` type.
//!
//! ## Semantics
//!
//! Addition, subtraction and multiplication wrap on overflow. Division
//! truncates toward zero and reports a zero divisor as
//! `ArithmeticError::DivisionByZero` instead of trapping. The only
//! overflowing quotient, `MIN / -1`, wraps to `MIN`.
//!
//! ```rust
//! use tally_core::calc::ops::{divide, multiply, stress_test, subtract, sum};
//!
//! assert_eq!(sum(2i32, 3), 5);
//! assert_eq!(subtract(5i32, 3), 2);
//! assert_eq!(multiply(4i32, 6), 24);
//! assert_eq!(divide(10i32, 3), Ok(3));
//! assert_eq!(stress_test(10i32), 45);
//! ```

pub mod calc;
pub mod num;
