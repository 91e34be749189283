// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tempo-core: Vocabulary types shared by the timer registry and its hosts

pub mod clock;
pub mod status;
pub mod time_fmt;
pub mod timer;

pub use clock::{Clock, FakeClock, SystemClock};
pub use status::TimerStatus;
pub use time_fmt::{format_elapsed, format_reading};
pub use timer::{TimeBasis, TimerName};
