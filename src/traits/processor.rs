use async_trait::async_trait;

use crate::engine::{ProcessOptions, RunOutcome, Sequence};
use crate::errors::ProcessError;

#[async_trait]
pub trait Processor: Send + Sync {
    /// Walk `sequence` in order under `options`.
    ///
    /// Returns `Ok(RunOutcome::Cancelled)` for a clean stop and
    /// `Err(ProcessError::CancelledDuringDelay)` when cancellation lands mid-wait.
    async fn process(
        &self,
        sequence: &Sequence,
        options: &ProcessOptions,
    ) -> Result<RunOutcome, ProcessError>;

    fn name(&self) -> &'static str;
}
