// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Process-wide constants and environment lookup.
//!
//! Everything here is fixed for the life of the process. The installation
//! root is read from the environment on first access and cached, so every
//! caller in a process sees the same answer no matter when it asks.

use std::env;

use once_cell::sync::Lazy;

/// Conventional scratch location used by suite tools for intermediate files.
pub const DIR_TMP: &str = "/tmp";

/// Environment variable naming the `wsh` installation root.
pub const WSH_ROOT_VAR: &str = "WSH_ROOT";

static WSH_ROOT: Lazy<String> = Lazy::new(|| root_from_env(WSH_ROOT_VAR));

/// The `wsh` installation root.
///
/// Read from [`WSH_ROOT_VAR`] the first time any caller asks, fixed
/// thereafter. When the variable is unset this is `""`; tools treat an
/// empty root as "not installed" rather than an error.
///
/// ```
/// let root = wshutils::env::wsh_root();
/// assert_eq!(root, wshutils::env::wsh_root());
/// ```
pub fn wsh_root() -> &'static str {
    &WSH_ROOT
}

/// Looks up a root directory in `var`. Unset and non-Unicode values are
/// both treated as unset.
fn root_from_env(var: &str) -> String {
    env::var(var).unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_root_from_env_unset() {
        assert_eq!("", root_from_env("WSH_ROOT_TEST_UNSET"));
    }

    #[test]
    fn test_root_from_env_set() {
        unsafe {
            env::set_var("WSH_ROOT_TEST_SET", "/srv/wsh");
        }
        assert_eq!("/srv/wsh", root_from_env("WSH_ROOT_TEST_SET"));
    }

    #[test]
    fn test_root_from_env_preserves_value_exactly() {
        // roots with spaces and non-ASCII come back untouched
        unsafe {
            env::set_var("WSH_ROOT_TEST_EXACT", "/mnt/wsh töols/v 0.1");
        }
        assert_eq!(
            "/mnt/wsh töols/v 0.1",
            root_from_env("WSH_ROOT_TEST_EXACT")
        );
    }
}
