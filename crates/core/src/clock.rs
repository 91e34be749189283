// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstractions for timer evaluation.
//!
//! The registry never owns time. It reads one of two host clocks: continuous
//! seconds since an origin, and a discrete frame counter the host advances
//! once per tick.

use crate::timer::TimeBasis;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Source of the two time readings a timer can measure against.
pub trait Clock: Clone + Send + Sync {
    /// Monotonic seconds elapsed since the clock origin.
    fn seconds(&self) -> f64;

    /// Monotonic frame counter.
    fn ticks(&self) -> u64;

    /// Reading of the clock matching `basis`, as a float.
    fn read(&self, basis: TimeBasis) -> f64 {
        match basis {
            TimeBasis::Seconds => self.seconds(),
            TimeBasis::Ticks => self.ticks() as f64,
        }
    }
}

/// Real clock: seconds from a fixed `Instant`, ticks advanced by the host.
///
/// Clones share the origin and the frame counter, so the driver and every
/// registry holding a clone see the same readings.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
    frames: Arc<AtomicU64>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            frames: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Advance the frame counter by one and return the new count.
    pub fn tick(&self) -> u64 {
        self.frames.fetch_add(1, Ordering::AcqRel) + 1
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn seconds(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn ticks(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }
}

#[derive(Debug, Default)]
struct FakeReadings {
    seconds: f64,
    ticks: u64,
}

/// Manually driven clock for tests. Starts at zero seconds and zero ticks.
#[derive(Debug, Clone, Default)]
pub struct FakeClock {
    readings: Arc<Mutex<FakeReadings>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_seconds(&self, seconds: f64) {
        self.readings.lock().seconds = seconds;
    }

    pub fn advance_seconds(&self, delta: f64) {
        self.readings.lock().seconds += delta;
    }

    pub fn set_ticks(&self, ticks: u64) {
        self.readings.lock().ticks = ticks;
    }

    pub fn advance_ticks(&self, delta: u64) {
        let mut readings = self.readings.lock();
        readings.ticks = readings.ticks.saturating_add(delta);
    }
}

impl Clock for FakeClock {
    fn seconds(&self) -> f64 {
        self.readings.lock().seconds
    }

    fn ticks(&self) -> u64 {
        self.readings.lock().ticks
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
