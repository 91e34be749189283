// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared human-readable formatting of clock readings.

use crate::timer::TimeBasis;

/// Format whole seconds as a short human-readable duration: `"5s"`, `"2m"`, `"1h30m"`, `"3d"`.
///
/// For the hours range, minutes are included when non-zero (e.g. `"1h"` vs `"1h5m"`).
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        let h = secs / 3600;
        let m = (secs % 3600) / 60;
        if m > 0 {
            format!("{}h{}m", h, m)
        } else {
            format!("{}h", h)
        }
    } else {
        format!("{}d", secs / 86400)
    }
}

/// Format a clock reading in the units of its basis.
///
/// Seconds under a minute keep one decimal (`"0.5s"`), longer spans use
/// [`format_elapsed`]. Ticks print as a count (`"1 tick"`, `"12 ticks"`).
/// Negative or non-finite readings format as zero.
pub fn format_reading(value: f64, basis: TimeBasis) -> String {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    match basis {
        TimeBasis::Seconds if value < 60.0 => format!("{:.1}s", value),
        TimeBasis::Seconds => format_elapsed(value as u64),
        TimeBasis::Ticks => {
            let n = value.floor() as u64;
            if n == 1 {
                "1 tick".to_string()
            } else {
                format!("{} ticks", n)
            }
        }
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
