// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named timer registry and the per-tick evaluation pass

use crate::entry::{CompletionCallback, TimerEntry};
use crate::error::{NotReadyCause, TimerError};
use indexmap::IndexMap;
use parking_lot::Mutex;
use tempo_core::{Clock, TimeBasis, TimerName, TimerStatus};

/// Elapsed value hosts may substitute when `elapsed` fails, e.g.
/// `registry.elapsed("t").unwrap_or(ELAPSED_SENTINEL)`.
pub const ELAPSED_SENTINEL: f64 = -1.0;

/// Log a misuse and hand the error back to the caller.
fn report(err: TimerError) -> TimerError {
    tracing::error!(timer = %err.name(), "{}", err);
    err
}

/// Registry of named timers read against a shared clock.
///
/// All operations take `&self`; share the registry through `Arc`. Completion
/// callbacks run with the registry unlocked, so they may call back into it.
#[derive(Debug)]
pub struct TimerRegistry<C: Clock> {
    clock: C,
    timers: Mutex<IndexMap<TimerName, TimerEntry>>,
}

impl<C: Clock> TimerRegistry<C> {
    /// Create an empty registry reading `clock`
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            timers: Mutex::new(IndexMap::new()),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Register a new, unarmed timer.
    pub fn add_timer(&self, name: impl Into<TimerName>) -> Result<(), TimerError> {
        let name = name.into();
        let mut timers = self.timers.lock();
        if timers.contains_key(&name) {
            return Err(report(TimerError::Duplicate(name)));
        }
        tracing::debug!(timer = %name, "timer added");
        timers.insert(name.clone(), TimerEntry::new(name));
        Ok(())
    }

    /// Arm (or re-arm) a timer from an explicit start reading.
    ///
    /// `start` is taken as given, not re-read from the clock, so a timer can
    /// be armed retroactively or with an offset. The timer need not be armed
    /// already. Any attached callback is kept.
    pub fn arm_timer(
        &self,
        name: &str,
        start: f64,
        duration: f64,
        basis: TimeBasis,
    ) -> Result<(), TimerError> {
        let mut timers = self.timers.lock();
        let Some(entry) = timers.get_mut(name) else {
            return Err(report(TimerError::Unknown(TimerName::new(name))));
        };
        if !start.is_finite() || duration.is_nan() || duration < 0.0 {
            return Err(report(TimerError::InvalidDuration {
                name: entry.name.clone(),
                start,
                duration,
            }));
        }
        entry.arm(start, duration, basis);
        tracing::debug!(timer = name, start, duration, %basis, "timer armed");
        Ok(())
    }

    /// Arm (or re-arm) a timer starting at the current reading of `basis`.
    pub fn arm_timer_now(
        &self,
        name: &str,
        duration: f64,
        basis: TimeBasis,
    ) -> Result<(), TimerError> {
        self.arm_timer(name, self.clock.read(basis), duration, basis)
    }

    /// Restart an armed timer from the current reading of its own basis.
    ///
    /// Duration and basis are unchanged.
    pub fn reset_timer(&self, name: &str) -> Result<(), TimerError> {
        self.with_ready(name, |entry, clock| {
            entry.start_time = clock.read(entry.basis);
            tracing::debug!(timer = name, start = entry.start_time, "timer reset");
        })
    }

    /// Whether an armed timer's elapsed time is still below its duration.
    pub fn is_running(&self, name: &str) -> Result<bool, TimerError> {
        self.with_ready(name, |entry, clock| entry.is_running(clock))
    }

    /// Current reading of the timer's basis minus its start reading.
    pub fn elapsed(&self, name: &str) -> Result<f64, TimerError> {
        self.with_ready(name, |entry, clock| entry.elapsed(clock))
    }

    /// Attach the handler fired when the timer expires, replacing any previous one.
    pub fn set_completion_callback<F>(&self, name: &str, callback: F) -> Result<(), TimerError>
    where
        F: FnMut() + Send + 'static,
    {
        let callback: CompletionCallback = Box::new(callback);
        self.with_ready(name, move |entry, _| entry.set_callback(Some(callback)))
    }

    /// Detach the completion handler, if any.
    pub fn clear_completion_callback(&self, name: &str) -> Result<(), TimerError> {
        self.with_ready(name, |entry, _| entry.set_callback(None))
    }

    pub fn contains_timer(&self, name: &str) -> bool {
        self.timers.lock().contains_key(name)
    }

    /// False for unknown names as well as unarmed timers.
    pub fn is_armed(&self, name: &str) -> bool {
        self.timers
            .lock()
            .get(name)
            .is_some_and(|entry| entry.armed)
    }

    /// Snapshot of an armed timer from a single clock reading.
    pub fn status(&self, name: &str) -> Result<TimerStatus, TimerError> {
        self.with_ready(name, |entry, clock| {
            TimerStatus::new(
                entry.name.clone(),
                entry.basis,
                entry.duration,
                entry.elapsed(clock),
                entry.has_callback(),
            )
        })
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> Vec<TimerName> {
        self.timers.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.timers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.lock().is_empty()
    }

    /// Evaluate every timer once and fire callbacks on running→expired edges.
    ///
    /// Call once per host tick. Each entry is fully handled, including its
    /// callback, before the next one. Timers added by a callback are first
    /// evaluated on the following pass. Returns the number of callbacks fired.
    pub fn evaluate_all(&self) -> usize {
        let names = self.names();
        let mut fired = 0;
        for name in names {
            let Some((mut callback, generation)) = self.observe(&name) else {
                continue;
            };
            callback();
            fired += 1;
            // Dropped outside the lock when the slot changed during the call.
            let _stale = self.restore_callback(&name, callback, generation);
        }
        fired
    }

    /// Record this pass's running state for one timer. On a running→expired
    /// edge with a callback attached, take the callback out for invocation.
    fn observe(&self, name: &TimerName) -> Option<(CompletionCallback, u64)> {
        let mut timers = self.timers.lock();
        let entry = timers.get_mut(name.as_str())?;
        if !entry.armed {
            return None;
        }
        let running = entry.is_running(&self.clock);
        let expired = !running && entry.previous_running;
        entry.previous_running = running;
        if !expired {
            return None;
        }
        tracing::debug!(timer = %name, has_callback = entry.has_callback(), "timer expired");
        let generation = entry.callback_generation;
        entry.callback.take().map(|callback| (callback, generation))
    }

    /// Put a fired callback back unless the slot was set or cleared meanwhile.
    fn restore_callback(
        &self,
        name: &TimerName,
        callback: CompletionCallback,
        generation: u64,
    ) -> Option<CompletionCallback> {
        let mut timers = self.timers.lock();
        match timers.get_mut(name.as_str()) {
            Some(entry) if entry.callback_generation == generation => {
                entry.callback = Some(callback);
                None
            }
            _ => Some(callback),
        }
    }

    /// Run `f` on an existing, armed timer; report misuse otherwise.
    fn with_ready<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut TimerEntry, &C) -> T,
    ) -> Result<T, TimerError> {
        let mut timers = self.timers.lock();
        let cause = match timers.get_mut(name) {
            Some(entry) if entry.armed => return Ok(f(entry, &self.clock)),
            Some(_) => NotReadyCause::NotArmed,
            None => NotReadyCause::Unknown,
        };
        Err(report(TimerError::NotReady {
            name: TimerName::new(name),
            cause,
        }))
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
