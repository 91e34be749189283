// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tempo reference host
//!
//! Drives a timer registry from a tokio interval: one frame tick and one
//! evaluation pass per interval tick.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod driver;
pub mod env;
mod error;
mod logging;

pub use driver::{Driver, DriverConfig, DriverStats, DEFAULT_TICK_PERIOD};
pub use error::DriverError;
pub use logging::setup_logging;
