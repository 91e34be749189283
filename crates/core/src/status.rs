// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time snapshot of an armed timer.

use crate::time_fmt::format_reading;
use crate::timer::{TimeBasis, TimerName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of one armed timer, computed from a single clock reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerStatus {
    pub name: TimerName,
    pub basis: TimeBasis,
    pub duration: f64,
    pub elapsed: f64,
    /// `duration - elapsed`, floored at zero.
    pub remaining: f64,
    pub running: bool,
    pub has_callback: bool,
}

impl TimerStatus {
    pub fn new(
        name: TimerName,
        basis: TimeBasis,
        duration: f64,
        elapsed: f64,
        has_callback: bool,
    ) -> Self {
        Self {
            name,
            basis,
            duration,
            elapsed,
            remaining: (duration - elapsed).max(0.0),
            running: elapsed < duration,
            has_callback,
        }
    }
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.running { "running" } else { "expired" };
        write!(
            f,
            "{} [{}] {} of {} ({} left)",
            self.name,
            state,
            format_reading(self.elapsed, self.basis),
            format_reading(self.duration, self.basis),
            format_reading(self.remaining, self.basis),
        )
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
