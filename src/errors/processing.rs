// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by a sequence processing run.
//!
//! A clean stop at the top of an iteration is not represented here: it is a
//! successful [`RunOutcome::Cancelled`](crate::engine::RunOutcome::Cancelled).

use thiserror::Error;

/// Fixed message carried by [`ProcessError::CancelledDuringDelay`].
pub const CANCELLED_DURING_DELAY: &str = "Cancelled during delay.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// The input was not an array of numbers. Raised before any item is touched.
    #[error("{reason}")]
    InvalidInput { reason: String },

    /// The cancellation token fired while the run was waiting between items.
    #[error("{}", CANCELLED_DURING_DELAY)]
    CancelledDuringDelay,
}

impl ProcessError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
