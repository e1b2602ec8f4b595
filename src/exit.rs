// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Consistent exit behaviour for `wsh` tools.

use std::process;

/// Conventional status reported by a tool that finished its work.
pub const EXIT_SUCCESS: i32 = 0;

/// Terminates the current process, reporting `status` to the parent.
///
/// Every tool leaves the process through here, so teardown that must run on
/// every exit path has a single home. `process::exit` does not unwind;
/// values on the stack are not dropped and buffered output should be
/// flushed first.
pub fn clean_up(status: i32) -> ! {
    process::exit(status)
}

/// [`clean_up`] with [`EXIT_SUCCESS`].
pub fn clean_up_ok() -> ! {
    clean_up(EXIT_SUCCESS)
}
