// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Shared Support for the `wsh` Tool Suite
//!
//! Every tool in the suite links this crate first. It provides the handful
//! of things the tools must agree on:
//!
//! - **Constants**: the conventional scratch directory and the installation
//!   root ([`env`]).
//! - **Logging**: the shared event target and subscriber installation
//!   ([`logger`]).
//! - **Exit handling**: the one place a tool leaves the process from
//!   ([`exit`]).
//!
//! # Quick Start
//!
//! ```no_run
//! use wshutils::{env, exit, logger};
//!
//! fn main() {
//!     if let Err(err) = logger::init() {
//!         eprintln!("{err}");
//!         exit::clean_up(1);
//!     }
//!
//!     tracing::info!(
//!         target: logger::LOG_CONTEXT,
//!         root = env::wsh_root(),
//!         version = wshutils::VERSION,
//!         "starting",
//!     );
//!
//!     exit::clean_up_ok();
//! }
//! ```
//!
//! # Environment
//!
//! | Variable   | Description                          | Default |
//! |------------|--------------------------------------|---------|
//! | `WSH_ROOT` | Installation root of the suite       | `""`    |
//! | `RUST_LOG` | Log filter used by [`logger::init`]  | `info`  |

pub mod env;
pub mod exit;
pub mod logger;

/// The suite version this crate was released with, taken from the manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use env::{wsh_root, DIR_TMP, WSH_ROOT_VAR};
pub use exit::{clean_up, clean_up_ok, EXIT_SUCCESS};
pub use logger::LOG_CONTEXT;
