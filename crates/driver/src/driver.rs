// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interval-driven evaluation loop

use crate::env;
use crate::error::DriverError;
use std::sync::Arc;
use std::time::Duration;
use tempo_core::SystemClock;
use tempo_engine::TimerRegistry;
use tokio::sync::Notify;
use tracing::{debug, info};

/// Roughly one frame at 60 Hz.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub tick_period: Duration,
}

impl DriverConfig {
    /// Load config, honoring `TEMPO_TICK_MS`. Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            tick_period: env::tick_period().unwrap_or(DEFAULT_TICK_PERIOD),
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }
}

/// Counters from one `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub ticks: u64,
    pub fired: u64,
}

/// Host loop calling `evaluate_all` once per tick.
pub struct Driver {
    registry: Arc<TimerRegistry<SystemClock>>,
    config: DriverConfig,
}

impl Driver {
    pub fn new(
        registry: Arc<TimerRegistry<SystemClock>>,
        config: DriverConfig,
    ) -> Result<Self, DriverError> {
        if config.tick_period.is_zero() {
            return Err(DriverError::ZeroTickPeriod);
        }
        Ok(Self { registry, config })
    }

    pub fn registry(&self) -> &Arc<TimerRegistry<SystemClock>> {
        &self.registry
    }

    /// Advance the frame counter, then evaluate every timer. Returns callbacks fired.
    pub fn tick(&self) -> usize {
        let frame = self.registry.clock().tick();
        let fired = self.registry.evaluate_all();
        if fired > 0 {
            debug!(frame, fired, "timers fired");
        }
        fired
    }

    /// Tick until `shutdown` is notified.
    pub async fn run(&self, shutdown: Arc<Notify>) -> DriverStats {
        let period_ms = self.config.tick_period.as_millis() as u64;
        info!(period_ms, "timer driver started");

        // Created once outside the loop so select! does not restart the period.
        let mut interval = tokio::time::interval(self.config.tick_period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut stats = DriverStats::default();
        loop {
            tokio::select! {
                _ = shutdown.notified() => {
                    info!(ticks = stats.ticks, fired = stats.fired, "timer driver stopped");
                    break;
                }
                _ = interval.tick() => {
                    stats.fired += self.tick() as u64;
                    stats.ticks += 1;
                }
            }
        }
        stats
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
