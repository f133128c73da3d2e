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

//! Opt-in logging for the bridge.
//!
//! The crates log through the `log` facade and stay silent until the host
//! calls `tally_logging_init`, which installs `env_logger` as the global
//! logger. The filter is read from the `TALLY_LOG` environment variable using
//! the usual `env_logger` syntax (`TALLY_LOG=debug`, `TALLY_LOG=tally_core=trace`)
//! and defaults to `warn`.

use env_logger::Env;

/// Environment variable holding the log filter.
pub const LOG_FILTER_ENV: &str = "TALLY_LOG";

/// Filter used when `TALLY_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs `env_logger` as the global logger.
///
/// Returns `true` if this call installed the logger and `false` if a global
/// logger was already set, by an earlier call or by the host. Calling it more
/// than once is harmless.
#[no_mangle]
pub extern "C" fn tally_logging_init() -> bool {
    let env = Env::new().filter_or(LOG_FILTER_ENV, DEFAULT_LOG_FILTER);
    match env_logger::Builder::from_env(env).try_init() {
        Ok(()) => {
            log::debug!("logging initialized from `{}`", LOG_FILTER_ENV);
            true
        }
        Err(_) => false,
    }
}
