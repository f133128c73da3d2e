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

//! # Numeric Operations Traits
//!
//! By-value arithmetic traits for the signed integer primitives, one module
//! per overflow behavior:
//!
//! - `wrapping_arithmetic`: `WrappingAddVal`, `WrappingSubVal`,
//!   `WrappingMulVal`, `WrappingDivVal`. Two's-complement wraparound, the
//!   behavior of the flat C surface.
//! - `checked_arithmetic`: `CheckedAddVal`, `CheckedSubVal`, `CheckedMulVal`,
//!   `CheckedDivVal`, returning `None` on overflow or a zero divisor.
//! - `saturating_arithmetic`: `SaturatingAddVal`, `SaturatingSubVal`,
//!   `SaturatingMulVal`, `SaturatingDivVal`, clamping to the type bounds.
//!
//! Wrapping and saturating division panic on a zero divisor, exactly like the
//! intrinsic methods they forward to. Callers that must not panic test the
//! divisor first or use the checked variant.

pub mod checked_arithmetic;
pub mod saturating_arithmetic;
pub mod wrapping_arithmetic;
