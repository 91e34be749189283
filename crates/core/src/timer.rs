// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer naming and time basis types.
//!
//! A `TimerName` is the registry key callers use to address a logical timer
//! from independent call sites. The `TimeBasis` selects which of the host's
//! two clocks the timer measures against.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique name of a registered timer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerName(pub String);

impl TimerName {
    /// Create a new TimerName from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the string value of this TimerName.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Timer name scoped under a namespace, e.g. `"boss/enrage"`.
    ///
    /// An empty namespace yields the bare name.
    pub fn scoped(namespace: &str, name: &str) -> Self {
        if namespace.is_empty() {
            Self::new(name)
        } else {
            Self::new(format!("{}/{}", namespace, name))
        }
    }

    /// Splits a scoped name into `(namespace, name)`.
    ///
    /// Unscoped names return an empty namespace.
    pub fn split_scope(&self) -> (&str, &str) {
        match self.0.rsplit_once('/') {
            Some((ns, name)) => (ns, name),
            None => ("", &self.0),
        }
    }
}

impl fmt::Display for TimerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TimerName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TimerName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&TimerName> for TimerName {
    fn from(name: &TimerName) -> Self {
        name.clone()
    }
}

impl PartialEq<str> for TimerName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TimerName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Borrow<str> for TimerName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Which clock a timer reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBasis {
    /// Continuous wall-clock seconds since the clock origin.
    #[default]
    Seconds,
    /// Discrete, monotonically increasing frame counter.
    Ticks,
}

impl TimeBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBasis::Seconds => "seconds",
            TimeBasis::Ticks => "ticks",
        }
    }
}

impl fmt::Display for TimeBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
