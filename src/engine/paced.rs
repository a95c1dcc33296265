// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::engine::progress::percent_complete;
use crate::engine::wait::{wait_or_cancel, WaitOutcome};
use crate::engine::{ProcessOptions, RunOutcome, Sequence};
use crate::errors::ProcessError;
use crate::observability::messages::{sequence::*, StructuredLog};
use crate::traits::Processor;

/// Walks a sequence of numbers one item at a time with a fixed delay between items.
///
/// For each item the run:
/// 1. stops cleanly if the token is already cancelled,
/// 2. emits a "Processing" event for the value,
/// 3. reports `round(100 * (i + 1) / n)` to the progress observer, if any,
/// 4. waits `delay` before the next item, racing the token.
///
/// A token that fires during step 4 rejects the run with
/// [`ProcessError::CancelledDuringDelay`]. There is no wait after the last item.
///
/// The processor holds no state, so one instance can drive any number of
/// concurrent runs; they only interact if the caller hands them the same token.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequenceProcessor;

impl SequenceProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Validate untyped input and run it.
    ///
    /// Shape errors are returned before any event, progress call or wait.
    pub async fn process_json(
        &self,
        input: &Value,
        options: &ProcessOptions,
    ) -> Result<RunOutcome, ProcessError> {
        let sequence = Sequence::from_json(input)?;
        self.process(&sequence, options).await
    }

    async fn run(
        &self,
        sequence: &Sequence,
        options: &ProcessOptions,
    ) -> Result<RunOutcome, ProcessError> {
        let total = sequence.len();
        if total == 0 {
            return Ok(RunOutcome::Completed { processed: 0 });
        }

        let token = options.cancellation.as_ref();
        let start = Instant::now();

        for (index, value) in sequence.iter().enumerate() {
            if is_cancelled(token) {
                RunCancelled {
                    processed: index,
                    total,
                }
                .log();
                return Ok(RunOutcome::Cancelled { processed: index });
            }

            ItemProcessing { index, value }.log();

            if let Some(observer) = &options.on_progress {
                let percent = percent_complete(index, total);
                ProgressReported { percent }.log();
                observer.on_progress(percent);
            }

            let has_next = index + 1 < total;
            // A cancel that landed before the wait starts is left for the next
            // top-of-loop check.
            if has_next && !is_cancelled(token) {
                if let WaitOutcome::Cancelled = wait_or_cancel(options.delay, token).await {
                    DelayInterrupted {
                        processed: index + 1,
                        total,
                        delay: options.delay,
                    }
                    .log();
                    return Err(ProcessError::CancelledDuringDelay);
                }
            }
        }

        RunCompleted {
            processed: total,
            duration: start.elapsed(),
        }
        .log();

        Ok(RunOutcome::Completed { processed: total })
    }
}

fn is_cancelled(token: Option<&CancellationToken>) -> bool {
    token.is_some_and(CancellationToken::is_cancelled)
}

#[async_trait]
impl Processor for SequenceProcessor {
    async fn process(
        &self,
        sequence: &Sequence,
        options: &ProcessOptions,
    ) -> Result<RunOutcome, ProcessError> {
        let started = RunStarted {
            processor: self.name(),
            item_count: sequence.len(),
            delay: options.delay,
        };
        let span = started.span("sequence_run");
        started.log();

        self.run(sequence, options).instrument(span).await
    }

    fn name(&self) -> &'static str {
        "paced_sequence"
    }
}
