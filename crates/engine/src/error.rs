// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for registry operations

use tempo_core::TimerName;
use thiserror::Error;

/// Why a timer cannot serve a query, reset, or callback operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotReadyCause {
    /// No timer with that name was ever added.
    Unknown,
    /// The timer exists but has never been armed.
    NotArmed,
}

/// Misuse of the timer registry.
///
/// Every variant is logged at the registry boundary before it is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimerError {
    #[error("Cannot add {0} as new timer. {0} already exists.")]
    Duplicate(TimerName),
    #[error("Cannot complete operation. \"{0}\" is not an existing timer.")]
    Unknown(TimerName),
    #[error("Cannot complete operation. \"{name}\" is not an existing timer or has not been set.")]
    NotReady {
        name: TimerName,
        cause: NotReadyCause,
    },
    #[error("Cannot arm \"{name}\" with duration {duration} from start {start}.")]
    InvalidDuration {
        name: TimerName,
        start: f64,
        duration: f64,
    },
}

impl TimerError {
    /// Name of the timer the failed operation referenced.
    pub fn name(&self) -> &TimerName {
        match self {
            TimerError::Duplicate(name) | TimerError::Unknown(name) => name,
            TimerError::NotReady { name, .. } | TimerError::InvalidDuration { name, .. } => name,
        }
    }

    /// True when the referenced name was never added.
    pub fn is_unknown(&self) -> bool {
        matches!(
            self,
            TimerError::Unknown(_)
                | TimerError::NotReady {
                    cause: NotReadyCause::Unknown,
                    ..
                }
        )
    }
}
