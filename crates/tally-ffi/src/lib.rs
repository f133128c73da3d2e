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

//! # Tally FFI
//!
//! **C-Compatible Bindings for the Tally Arithmetic Core.**
//!
//! This crate is the native bridge a host application links against. It
//! exposes the arithmetic operations of `tally-core` over fixed-width
//! `int32_t` values through a flat, ABI-stable function interface.
//!
//! ## Surfaces
//!
//! 1.  **Flat functions** (`arith`): `tally_sum`, `tally_subtract`,
//!     `tally_multiply`, `tally_divide`, `tally_stress_test`. Stateless and
//!     callable from any thread. Overflow wraps.
//! 2.  **Status-returning functions** (`arith`, `calculator`): report failures
//!     as a `TallyStatus` and write results through an out-pointer.
//! 3.  **Calculator handles** (`calculator`): an opaque `Calculator` bound to an
//!     overflow policy, with evaluation counters.
//! 4.  **Logging** (`logging`): opt-in `env_logger` installation.
//!
//! ## Core Design Principles
//!
//! 1.  **Opaque Handles**: Calculators are hidden behind raw pointers. Every
//!     `_new` call must have a corresponding `_free` call.
//! 2.  **Fail-Fast Safety**: Passing `NULL` pointers, or a zero divisor to the
//!     flat `tally_divide`, panics. A panic cannot unwind across an
//!     `extern "C"` boundary, so the process aborts instead of running into
//!     undefined behavior.
//! 3.  **Recoverable Errors**: Conditions a caller can reasonably trigger with
//!     valid input (a zero divisor, overflow under a checked policy, an
//!     unknown operation name) are reported as `TallyStatus` codes by the
//!     status-returning functions.

pub mod arith;
pub mod calculator;
pub mod logging;
pub mod status;
