// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-name timer state

use std::fmt;
use tempo_core::{Clock, TimeBasis, TimerName};

/// Handler invoked once when a timer is observed going from running to expired.
pub type CompletionCallback = Box<dyn FnMut() + Send + 'static>;

/// State of one registered timer.
pub(crate) struct TimerEntry {
    pub(crate) name: TimerName,
    pub(crate) start_time: f64,
    pub(crate) duration: f64,
    pub(crate) basis: TimeBasis,
    pub(crate) armed: bool,
    pub(crate) callback: Option<CompletionCallback>,
    /// Bumped on every set/clear so an in-flight callback knows whether its
    /// slot was replaced while it ran.
    pub(crate) callback_generation: u64,
    /// Classification from the previous evaluation pass. Only the evaluation
    /// pass writes this.
    pub(crate) previous_running: bool,
}

impl TimerEntry {
    pub(crate) fn new(name: TimerName) -> Self {
        Self {
            name,
            start_time: 0.0,
            duration: 0.0,
            basis: TimeBasis::Seconds,
            armed: false,
            callback: None,
            callback_generation: 0,
            previous_running: false,
        }
    }

    pub(crate) fn arm(&mut self, start: f64, duration: f64, basis: TimeBasis) {
        self.start_time = start;
        self.duration = duration;
        self.basis = basis;
        self.armed = true;
    }

    pub(crate) fn elapsed<C: Clock>(&self, clock: &C) -> f64 {
        clock.read(self.basis) - self.start_time
    }

    pub(crate) fn is_running<C: Clock>(&self, clock: &C) -> bool {
        self.elapsed(clock) < self.duration
    }

    pub(crate) fn set_callback(&mut self, callback: Option<CompletionCallback>) {
        self.callback = callback;
        self.callback_generation = self.callback_generation.wrapping_add(1);
    }

    pub(crate) fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl fmt::Debug for TimerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerEntry")
            .field("name", &self.name)
            .field("start_time", &self.start_time)
            .field("duration", &self.duration)
            .field("basis", &self.basis)
            .field("armed", &self.armed)
            .field("has_callback", &self.has_callback())
            .field("previous_running", &self.previous_running)
            .finish()
    }
}
