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

//! # Arithmetic Operations
//!
//! The operations exposed to the host application, in two flavors:
//!
//! - `ops`: Stateless generic free functions. `sum`, `subtract` and
//!   `multiply` wrap on overflow, `divide` reports a zero divisor as an
//!   error, and `stress_test` accumulates `0 + 1 + ... + (n - 1)` in a loop.
//! - `calculator`: A `Calculator` that evaluates a `BinaryOp` (or the
//!   summation probe) under a configured `OverflowPolicy` and keeps
//!   evaluation statistics.
//!
//! Shared vocabulary lives in `operation` (`BinaryOp`), `policy`
//! (`OverflowPolicy`) and `error` (`ArithmeticError`).

pub mod calculator;
pub mod error;
pub mod operation;
pub mod ops;
pub mod policy;
