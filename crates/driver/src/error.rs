// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the host driver

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("tick period must be greater than zero")]
    ZeroTickPeriod,
    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}
