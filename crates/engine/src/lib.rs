// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Tempo timer registry

mod entry;
mod error;
mod registry;

pub use entry::CompletionCallback;
pub use error::{NotReadyCause, TimerError};
pub use registry::{TimerRegistry, ELAPSED_SENTINEL};
