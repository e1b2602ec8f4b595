// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Logging context shared across the `wsh` suite.
//!
//! Tools emit events under [`LOG_CONTEXT`] so output from any mix of suite
//! tools filters and sorts as one stream:
//!
//! ```
//! use wshutils::logger;
//!
//! tracing::debug!(target: logger::LOG_CONTEXT, "scanning workspace");
//! ```

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Target under which suite tools emit log events.
pub const LOG_CONTEXT: &str = "wsh";

/// Filter applied when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Installs the global tracing subscriber for a `wsh` tool.
///
/// Events are written to stderr as human-readable lines. The filter honours
/// `RUST_LOG`, falling back to [`DEFAULT_LOG_LEVEL`] when the variable is
/// unset or unparsable.
///
/// # Errors
///
/// Fails if a global subscriber is already installed. Tools that may be
/// embedded under another runtime can ignore the error.
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
