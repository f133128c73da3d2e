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

//! # Foreign Function Interface (FFI) for Tally Calculators
//!
//! A calculator evaluates the arithmetic operations under a fixed overflow
//! policy and reports failures as `TallyStatus` codes instead of aborting.
//!
//! ## Usage Lifecycle
//!
//! 1.  **Instantiation**: Create a calculator with `tally_calculator_new`,
//!     choosing an `FfiOverflowPolicy`.
//! 2.  **Evaluation**: Call `tally_calculator_apply` with an `FfiBinaryOp`,
//!     `tally_calculator_apply_by_name` with an operation name such as
//!     `"sum"` or `"calculate_sum"`, or `tally_calculator_stress_test`.
//!     Results are written through the `out` pointer only when the returned
//!     status is `TallyStatus::Ok`.
//! 3.  **Inspection**: Read the counters with
//!     `tally_calculator_num_evaluations` and `tally_calculator_num_failures`.
//! 4.  **Cleanup**: Free the calculator with `tally_calculator_free`.
//!
//! ## Safety
//!
//! * **Pointer Validity**: Calculator pointers must come from
//!   `tally_calculator_new` and must not be used after `tally_calculator_free`.
//! * **Exclusive Access**: A calculator mutates its counters on every
//!   evaluation; do not share one handle between threads without locking.
//! * **Null Pointers**: Passing `NULL` (other than to `tally_calculator_free`)
//!   results in a panic.
//!
//! ## Exported API
//!
//! * `tally_calculator_new`
//! * `tally_calculator_free`
//! * `tally_calculator_policy`
//! * `tally_calculator_apply`
//! * `tally_calculator_apply_by_name`
//! * `tally_calculator_stress_test`
//! * `tally_calculator_num_evaluations`
//! * `tally_calculator_num_failures`
//! * `tally_calculator_reset_statistics`

use crate::status::{write_result, TallyStatus};
use libc::c_char;
use std::ffi::CStr;
use tally_core::calc::{
    calculator::Calculator,
    operation::{BinaryOp, ParseBinaryOpError},
    policy::OverflowPolicy,
};

/// A C-compatible representation of a binary arithmetic operation.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FfiBinaryOp {
    /// `a + b`
    Sum = 0,
    /// `a - b`
    Subtract = 1,
    /// `a * b`
    Multiply = 2,
    /// `a / b`, truncating toward zero.
    Divide = 3,
}

impl From<FfiBinaryOp> for BinaryOp {
    fn from(op: FfiBinaryOp) -> Self {
        match op {
            FfiBinaryOp::Sum => BinaryOp::Sum,
            FfiBinaryOp::Subtract => BinaryOp::Subtract,
            FfiBinaryOp::Multiply => BinaryOp::Multiply,
            FfiBinaryOp::Divide => BinaryOp::Divide,
        }
    }
}

/// A C-compatible representation of an overflow policy.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FfiOverflowPolicy {
    /// Two's-complement wraparound.
    Wrapping = 0,
    /// Overflow is reported as `TallyStatus::Overflow`.
    Checked = 1,
    /// Results are clamped to `INT32_MIN` or `INT32_MAX`.
    Saturating = 2,
}

impl From<FfiOverflowPolicy> for OverflowPolicy {
    fn from(policy: FfiOverflowPolicy) -> Self {
        match policy {
            FfiOverflowPolicy::Wrapping => OverflowPolicy::Wrapping,
            FfiOverflowPolicy::Checked => OverflowPolicy::Checked,
            FfiOverflowPolicy::Saturating => OverflowPolicy::Saturating,
        }
    }
}

impl From<OverflowPolicy> for FfiOverflowPolicy {
    fn from(policy: OverflowPolicy) -> Self {
        match policy {
            OverflowPolicy::Wrapping => FfiOverflowPolicy::Wrapping,
            OverflowPolicy::Checked => FfiOverflowPolicy::Checked,
            OverflowPolicy::Saturating => FfiOverflowPolicy::Saturating,
        }
    }
}

/// Creates a new calculator with the given overflow policy.
#[no_mangle]
pub extern "C" fn tally_calculator_new(policy: FfiOverflowPolicy) -> *mut Calculator<i32> {
    let calculator = Calculator::<i32>::new(policy.into());
    Box::into_raw(Box::new(calculator))
}

/// Frees the memory allocated for the calculator.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `tally_calculator_new`.
#[no_mangle]
pub unsafe extern "C" fn tally_calculator_free(ptr: *mut Calculator<i32>) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Returns the overflow policy of the calculator.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `tally_calculator_new`.
#[no_mangle]
pub unsafe extern "C" fn tally_calculator_policy(
    ptr: *const Calculator<i32>,
) -> FfiOverflowPolicy {
    assert!(
        !ptr.is_null(),
        "called `tally_calculator_policy` with null pointer"
    );
    (*ptr).policy().into()
}

/// Evaluates `a <op> b` and writes the result to `out`.
///
/// # Panics
///
/// This function will panic if `ptr` or `out` is a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences raw pointers.
/// The caller must ensure that `ptr` is valid and was allocated by
/// `tally_calculator_new`, and that `out` points to a writable `int32_t`.
#[no_mangle]
pub unsafe extern "C" fn tally_calculator_apply(
    ptr: *mut Calculator<i32>,
    op: FfiBinaryOp,
    a: i32,
    b: i32,
    out: *mut i32,
) -> TallyStatus {
    assert!(
        !ptr.is_null(),
        "called `tally_calculator_apply` with null pointer"
    );
    assert!(
        !out.is_null(),
        "called `tally_calculator_apply` with null output pointer"
    );

    let calculator = &mut *ptr;
    write_result(calculator.apply(op.into(), a, b), out)
}

/// Evaluates `a <name> b` and writes the result to `out`.
///
/// `name` is a NUL-terminated operation name: a short name (`"sum"`,
/// `"subtract"`, `"multiply"`, `"divide"`) or a host command name
/// (`"calculate_sum"`, ...). Unknown names, including names that are not
/// valid UTF-8, yield `TallyStatus::UnknownOperation` and are not counted
/// as evaluations.
///
/// # Panics
///
/// This function will panic if `ptr`, `name` or `out` is a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences raw pointers.
/// The caller must ensure that `ptr` is valid and was allocated by
/// `tally_calculator_new`, that `name` points to a NUL-terminated string,
/// and that `out` points to a writable `int32_t`.
#[no_mangle]
pub unsafe extern "C" fn tally_calculator_apply_by_name(
    ptr: *mut Calculator<i32>,
    name: *const c_char,
    a: i32,
    b: i32,
    out: *mut i32,
) -> TallyStatus {
    assert!(
        !ptr.is_null(),
        "called `tally_calculator_apply_by_name` with null pointer"
    );
    assert!(
        !name.is_null(),
        "called `tally_calculator_apply_by_name` with null name pointer"
    );
    assert!(
        !out.is_null(),
        "called `tally_calculator_apply_by_name` with null output pointer"
    );

    let name = CStr::from_ptr(name).to_string_lossy();
    let op = match name.parse::<BinaryOp>() {
        Ok(op) => op,
        Err(err) => {
            log::warn!("{}", err);
            return write_result::<ParseBinaryOpError>(Err(err), out);
        }
    };

    let calculator = &mut *ptr;
    write_result(calculator.apply(op, a, b), out)
}

/// Sums `0 .. n - 1` under the calculator's policy and writes the result to `out`.
///
/// # Panics
///
/// This function will panic if `ptr` or `out` is a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences raw pointers.
/// The caller must ensure that `ptr` is valid and was allocated by
/// `tally_calculator_new`, and that `out` points to a writable `int32_t`.
#[no_mangle]
pub unsafe extern "C" fn tally_calculator_stress_test(
    ptr: *mut Calculator<i32>,
    n: i32,
    out: *mut i32,
) -> TallyStatus {
    assert!(
        !ptr.is_null(),
        "called `tally_calculator_stress_test` with null pointer"
    );
    assert!(
        !out.is_null(),
        "called `tally_calculator_stress_test` with null output pointer"
    );

    let calculator = &mut *ptr;
    write_result(calculator.stress_test(n), out)
}

/// Returns the number of evaluations performed by the calculator.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `tally_calculator_new`.
#[no_mangle]
pub unsafe extern "C" fn tally_calculator_num_evaluations(ptr: *const Calculator<i32>) -> u64 {
    assert!(
        !ptr.is_null(),
        "called `tally_calculator_num_evaluations` with null pointer"
    );
    (*ptr).statistics().evaluations
}

/// Returns the number of failed evaluations performed by the calculator.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `tally_calculator_new`.
#[no_mangle]
pub unsafe extern "C" fn tally_calculator_num_failures(ptr: *const Calculator<i32>) -> u64 {
    assert!(
        !ptr.is_null(),
        "called `tally_calculator_num_failures` with null pointer"
    );
    (*ptr).statistics().failures
}

/// Resets the evaluation counters of the calculator.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `tally_calculator_new`.
#[no_mangle]
pub unsafe extern "C" fn tally_calculator_reset_statistics(ptr: *mut Calculator<i32>) {
    assert!(
        !ptr.is_null(),
        "called `tally_calculator_reset_statistics` with null pointer"
    );
    (*ptr).reset_statistics();
}
