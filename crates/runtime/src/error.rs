// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the overlay driver

use thiserror::Error;

/// Errors from talking to an overlay task
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("overlay task has stopped")]
    Closed,
    #[error("overlay task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
