// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the driver crate.

use std::time::Duration;

/// Tick period override
pub fn tick_period() -> Option<Duration> {
    std::env::var("TEMPO_TICK_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Log filter, `RUST_LOG` syntax
pub fn log_filter() -> Option<String> {
    std::env::var("RUST_LOG").ok().filter(|s| !s.is_empty())
}
