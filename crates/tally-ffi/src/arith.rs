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

//! # Flat Arithmetic Functions
//!
//! The stateless `int32_t` surface of the bridge, one function per operation:
//!
//! * `tally_sum`, `tally_subtract`, `tally_multiply`: two's-complement
//!   wraparound on overflow.
//! * `tally_divide`: truncation toward zero; `INT32_MIN / -1` wraps to
//!   `INT32_MIN`. A zero divisor aborts the process.
//! * `tally_divide_checked`: the same quotient, reporting a zero divisor as
//!   `TallyStatus::DivisionByZero` instead of aborting.
//! * `tally_stress_test`: sums `0 .. n - 1` in a loop; returns 0 for `n <= 0`.

use crate::status::{write_result, TallyStatus};
use tally_core::calc::ops;

/// Returns `a + b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn tally_sum(a: i32, b: i32) -> i32 {
    ops::sum(a, b)
}

/// Returns `a - b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn tally_subtract(a: i32, b: i32) -> i32 {
    ops::subtract(a, b)
}

/// Returns `a * b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn tally_multiply(a: i32, b: i32) -> i32 {
    ops::multiply(a, b)
}

/// Returns `a / b`, truncated toward zero.
///
/// # Panics
///
/// This function will panic if `b` is zero. The panic cannot unwind into
/// the caller, so the process aborts. Use `tally_divide_checked` when the
/// divisor is not known to be non-zero.
#[no_mangle]
pub extern "C" fn tally_divide(a: i32, b: i32) -> i32 {
    assert!(b != 0, "called `tally_divide` with a zero divisor: {} / 0", a);
    ops::divide_unchecked_divisor(a, b)
}

/// Divides `a` by `b` and writes the quotient to `out`.
///
/// Returns `TallyStatus::Ok` on success and `TallyStatus::DivisionByZero`
/// if `b` is zero, in which case `out` is not written.
///
/// # Panics
///
/// This function will panic if `out` is a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `out` points to a writable `int32_t`.
#[no_mangle]
pub unsafe extern "C" fn tally_divide_checked(a: i32, b: i32, out: *mut i32) -> TallyStatus {
    assert!(
        !out.is_null(),
        "called `tally_divide_checked` with null pointer"
    );

    let result = ops::divide(a, b);
    if let Err(err) = &result {
        log::debug!("tally_divide_checked({}, {}) failed: {}", a, b, err);
    }
    write_result(result, out)
}

/// Returns `0 + 1 + ... + (n - 1)`, wrapping on overflow. Returns 0 for
/// `n <= 0`. Runs in time linear in `n`.
#[no_mangle]
pub extern "C" fn tally_stress_test(n: i32) -> i32 {
    ops::stress_test(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hint::black_box;
    use std::process::Command;

    // Set in the child process that performs the aborting division.
    const ZERO_DIVISOR_CHILD_ENV: &str = "TALLY_ZERO_DIVISOR_CHILD";

    #[test]
    fn test_example_scenarios() {
        assert_eq!(tally_sum(2, 3), 5);
        assert_eq!(tally_subtract(5, 3), 2);
        assert_eq!(tally_multiply(4, 6), 24);
        assert_eq!(tally_divide(10, 3), 3);
        assert_eq!(tally_stress_test(10), 45);
    }

    #[test]
    fn test_wraparound_at_the_boundary() {
        assert_eq!(tally_sum(i32::MAX, 1), i32::MIN);
        assert_eq!(tally_subtract(i32::MIN, 1), i32::MAX);
        assert_eq!(tally_multiply(i32::MAX, 2), -2);
        assert_eq!(tally_divide(i32::MIN, -1), i32::MIN);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(tally_divide(-7, 2), -3);
        assert_eq!(tally_divide(7, -2), -3);
    }

    #[test]
    fn test_divide_by_zero_aborts_the_process() {
        if std::env::var_os(ZERO_DIVISOR_CHILD_ENV).is_some() {
            let _ = tally_divide(black_box(1), black_box(0));
            return;
        }

        let exe = std::env::current_exe().unwrap();
        let output = Command::new(exe)
            .args([
                "--exact",
                "arith::tests::test_divide_by_zero_aborts_the_process",
                "--nocapture",
                "--test-threads=1",
            ])
            .env(ZERO_DIVISOR_CHILD_ENV, "1")
            .output()
            .unwrap();

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("called `tally_divide` with a zero divisor"),
            "unexpected stderr: {}",
            stderr
        );

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            assert_eq!(output.status.signal(), Some(libc::SIGABRT));
        }
    }

    #[test]
    fn test_divide_checked() {
        let mut out = 0;
        unsafe {
            assert_eq!(tally_divide_checked(10, 3, &mut out), TallyStatus::Ok);
            assert_eq!(out, 3);

            assert_eq!(
                tally_divide_checked(10, 0, &mut out),
                TallyStatus::DivisionByZero
            );
            assert_eq!(out, 3);

            assert_eq!(tally_divide_checked(i32::MIN, -1, &mut out), TallyStatus::Ok);
            assert_eq!(out, i32::MIN);
        }
    }

    #[test]
    fn test_stress_test() {
        assert_eq!(tally_stress_test(0), 0);
        assert_eq!(tally_stress_test(5), 10);
        assert_eq!(tally_stress_test(-3), 0);
        assert_eq!(tally_stress_test(i32::MIN), 0);
    }
}
