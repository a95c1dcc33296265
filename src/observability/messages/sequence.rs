// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for sequence processing runs.
//!
//! This module contains message types for logging events related to:
//! * Run start and input rejection
//! * Per-item processing and progress
//! * Clean cancellation and cancellation during the inter-item delay
//! * Run completion

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Processing run started.
///
/// # Log Level
/// `debug!` - Lifecycle detail
///
/// # Example
/// ```
/// use sequence_pacer::observability::messages::sequence::RunStarted;
/// use std::time::Duration;
///
/// let msg = RunStarted {
///     processor: "paced_sequence",
///     item_count: 4,
///     delay: Duration::from_millis(1000),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct RunStarted<'a> {
    pub processor: &'a str,
    pub item_count: usize,
    pub delay: Duration,
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' starting run: {} items, delay={:?}",
            self.processor, self.item_count, self.delay
        )
    }
}

impl StructuredLog for RunStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            item_count = self.item_count,
            delay_ms = self.delay.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "sequence_run",
            span_name = name,
            processor = self.processor,
            item_count = self.item_count,
            delay_ms = self.delay.as_millis() as u64,
        )
    }
}

/// An item is being processed.
///
/// # Log Level
/// `info!` - One event per item
pub struct ItemProcessing {
    pub index: usize,
    pub value: f64,
}

impl Display for ItemProcessing {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Processing: {}", self.value)
    }
}

impl StructuredLog for ItemProcessing {
    fn log(&self) {
        tracing::info!(index = self.index, value = self.value, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("item", span_name = name, index = self.index, value = self.value)
    }
}

/// Progress was reported to the observer.
///
/// # Log Level
/// `debug!` - The observer itself is the user-facing channel
pub struct ProgressReported {
    pub percent: u8,
}

impl Display for ProgressReported {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Progress: {}%", self.percent)
    }
}

impl StructuredLog for ProgressReported {
    fn log(&self) {
        tracing::debug!(percent = self.percent, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("progress", span_name = name, percent = self.percent)
    }
}

/// The token was already cancelled at the top of an iteration.
///
/// # Log Level
/// `info!` - Clean stop, not a failure
///
/// # Example
/// ```
/// use sequence_pacer::observability::messages::sequence::RunCancelled;
///
/// let msg = RunCancelled { processed: 2, total: 4 };
/// assert_eq!(msg.to_string(), "Processing was cancelled.");
/// ```
pub struct RunCancelled {
    pub processed: usize,
    pub total: usize,
}

impl Display for RunCancelled {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Processing was cancelled.")
    }
}

impl StructuredLog for RunCancelled {
    fn log(&self) {
        tracing::info!(processed = self.processed, total = self.total, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run_cancelled",
            span_name = name,
            processed = self.processed,
            total = self.total,
        )
    }
}

/// The token fired while the run was waiting between items.
///
/// # Log Level
/// `warn!` - The run is rejected
pub struct DelayInterrupted {
    pub processed: usize,
    pub total: usize,
    pub delay: Duration,
}

impl Display for DelayInterrupted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Cancelled during delay after {} of {} items (delay={:?})",
            self.processed, self.total, self.delay
        )
    }
}

impl StructuredLog for DelayInterrupted {
    fn log(&self) {
        tracing::warn!(
            processed = self.processed,
            total = self.total,
            delay_ms = self.delay.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "delay_interrupted",
            span_name = name,
            processed = self.processed,
            total = self.total,
        )
    }
}

/// Every item was processed.
///
/// # Log Level
/// `info!` - Terminal event of a successful run
pub struct RunCompleted {
    pub processed: usize,
    pub duration: Duration,
}

impl Display for RunCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "All numbers processed.")
    }
}

impl StructuredLog for RunCompleted {
    fn log(&self) {
        tracing::info!(
            processed = self.processed,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run_completed",
            span_name = name,
            processed = self.processed,
            duration = ?self.duration,
        )
    }
}

/// Input failed validation before the run began.
///
/// # Log Level
/// `error!` - Failure surfaced to the caller
pub struct InputRejected<'a> {
    pub reason: &'a str,
}

impl Display for InputRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Input rejected: {}", self.reason)
    }
}

impl StructuredLog for InputRejected<'_> {
    fn log(&self) {
        tracing::error!(reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("input_rejected", span_name = name, reason = self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_processing_prints_integral_values_without_fraction() {
        let msg = ItemProcessing { index: 0, value: 10.0 };
        assert_eq!(msg.to_string(), "Processing: 10");

        let msg = ItemProcessing { index: 1, value: 2.5 };
        assert_eq!(msg.to_string(), "Processing: 2.5");
    }

    #[test]
    fn terminal_messages_match_run_output() {
        let done = RunCompleted {
            processed: 4,
            duration: Duration::from_millis(3000),
        };
        assert_eq!(done.to_string(), "All numbers processed.");
        assert_eq!(ProgressReported { percent: 25 }.to_string(), "Progress: 25%");
    }
}
