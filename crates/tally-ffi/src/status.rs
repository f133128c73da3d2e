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

use libc::c_char;
use tally_core::calc::{error::ArithmeticError, operation::ParseBinaryOpError};

/// Result code of the status-returning FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TallyStatus {
    /// The operation succeeded and the out-pointer holds the result.
    Ok = 0,
    /// The divisor was zero.
    DivisionByZero = 1,
    /// The result overflowed under a checked policy.
    Overflow = 2,
    /// The operation name was not recognized.
    UnknownOperation = 3,
}

impl TallyStatus {
    /// Returns `true` if the status is `Ok`.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<ArithmeticError> for TallyStatus {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => Self::DivisionByZero,
            ArithmeticError::Overflow(_) => Self::Overflow,
        }
    }
}

impl From<ParseBinaryOpError> for TallyStatus {
    fn from(_: ParseBinaryOpError) -> Self {
        Self::UnknownOperation
    }
}

impl std::fmt::Display for TallyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "Ok"),
            Self::DivisionByZero => write!(f, "DivisionByZero"),
            Self::Overflow => write!(f, "Overflow"),
            Self::UnknownOperation => write!(f, "UnknownOperation"),
        }
    }
}

/// Writes the outcome of `result` through `out` and returns the matching status.
/// `out` is left untouched on failure.
///
/// # Safety
///
/// `out` must be a valid, writable pointer to an `i32`.
#[inline]
pub(crate) unsafe fn write_result<E>(result: Result<i32, E>, out: *mut i32) -> TallyStatus
where
    E: Into<TallyStatus>,
{
    match result {
        Ok(value) => {
            *out = value;
            TallyStatus::Ok
        }
        Err(err) => err.into(),
    }
}

/// Returns a static, NUL-terminated description of a status code.
///
/// The returned pointer is valid for the lifetime of the process and must
/// not be freed.
#[no_mangle]
pub extern "C" fn tally_status_message(status: TallyStatus) -> *const c_char {
    let message = match status {
        TallyStatus::Ok => c"ok",
        TallyStatus::DivisionByZero => c"division by zero",
        TallyStatus::Overflow => c"integer overflow",
        TallyStatus::UnknownOperation => c"unknown operation",
    };
    message.as_ptr()
}
