// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log subscriber setup for hosts

use crate::env;
use crate::error::DriverError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Fails if a global subscriber is already installed.
pub fn setup_logging() -> Result<(), DriverError> {
    let filter = env::log_filter()
        .and_then(|f| EnvFilter::try_new(f).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))
}
