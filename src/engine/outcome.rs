// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// How a run that did not fail came to an end.
///
/// `processed` counts items whose "Processing" event was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every item was processed.
    Completed { processed: usize },
    /// The token was seen cancelled at the top of an iteration. A clean stop.
    Cancelled { processed: usize },
}

impl RunOutcome {
    pub fn processed(&self) -> usize {
        match self {
            RunOutcome::Completed { processed } | RunOutcome::Cancelled { processed } => *processed,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }
}
