//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL around a registry, its fake clock, and fire counters.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub use tempo_core::{Clock, FakeClock, TimeBasis, TimerName};
pub use tempo_engine::{NotReadyCause, TimerError, TimerRegistry, ELAPSED_SENTINEL};

/// Registry plus the clock it reads.
pub struct Harness {
    pub clock: FakeClock,
    pub registry: Arc<TimerRegistry<FakeClock>>,
}

impl Harness {
    pub fn new() -> Self {
        let clock = FakeClock::new();
        let registry = Arc::new(TimerRegistry::new(clock.clone()));
        Self { clock, registry }
    }

    /// Add and arm a timer in one step.
    pub fn armed(&self, name: &str, start: f64, duration: f64, basis: TimeBasis) -> &Self {
        self.registry.add_timer(name).unwrap();
        self.registry.arm_timer(name, start, duration, basis).unwrap();
        self
    }

    /// Attach a callback that counts fires.
    pub fn counter(&self, name: &str) -> FireCounter {
        let counter = FireCounter::default();
        let inner = Arc::clone(&counter.0);
        self.registry
            .set_completion_callback(name, move || {
                inner.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        counter
    }

    /// Set the seconds clock and run one evaluation pass.
    pub fn at_seconds(&self, seconds: f64) -> usize {
        self.clock.set_seconds(seconds);
        self.registry.evaluate_all()
    }

    /// Set the tick clock and run one evaluation pass.
    pub fn at_ticks(&self, ticks: u64) -> usize {
        self.clock.set_ticks(ticks);
        self.registry.evaluate_all()
    }
}

#[derive(Clone, Default)]
pub struct FireCounter(Arc<AtomicUsize>);

impl FireCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
