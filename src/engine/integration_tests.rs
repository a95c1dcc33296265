use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::engine::{ProcessOptions, RunOutcome, Sequence, SequenceProcessor};
use crate::errors::ProcessError;
use crate::traits::Processor;

/// End-to-end scenarios for the paced sequence processor on tokio's paused clock
#[cfg(test)]
mod tests {
    use super::*;

    type Timeline = Arc<Mutex<Vec<(u8, Duration)>>>;

    /// Options that record each progress value with its offset from `start`.
    fn timed_options(start: Instant, delay_ms: u64) -> (ProcessOptions, Timeline) {
        let timeline: Timeline = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&timeline);
        let options = ProcessOptions::default()
            .with_delay(Duration::from_millis(delay_ms))
            .with_progress(move |p: u8| sink.lock().unwrap().push((p, start.elapsed())));
        (options, timeline)
    }

    fn cancel_after(token: &CancellationToken, after_ms: u64) {
        let token = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(after_ms)).await;
            token.cancel();
        });
    }

    fn assert_at(actual: Duration, expected_ms: u64) {
        let expected = Duration::from_millis(expected_ms);
        assert!(
            actual >= expected && actual < expected + Duration::from_millis(5),
            "expected ~{:?}, got {:?}",
            expected,
            actual
        );
    }

    #[tokio::test(start_paused = true)]
    async fn four_items_finish_before_cancel_at_3500ms() {
        let token = CancellationToken::new();
        cancel_after(&token, 3500);

        let start = Instant::now();
        let (options, timeline) = timed_options(start, 1000);
        let options = options.with_cancellation(token.clone());

        let outcome = SequenceProcessor::new()
            .process_json(&json!([10, 20, 30, 40]), &options)
            .await;

        assert_eq!(outcome, Ok(RunOutcome::Completed { processed: 4 }));

        let timeline = timeline.lock().unwrap().clone();
        let percents: Vec<u8> = timeline.iter().map(|(p, _)| *p).collect();
        assert_eq!(percents, vec![25, 50, 75, 100]);
        for ((_, at), expected_ms) in timeline.iter().zip([0, 1000, 2000, 3000]) {
            assert_at(*at, expected_ms);
        }
        assert_at(start.elapsed(), 3000);
        assert!(!token.is_cancelled(), "run should finish before the cancel fires");
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_at_2500ms_rejects_during_third_wait() {
        let token = CancellationToken::new();
        cancel_after(&token, 2500);

        let start = Instant::now();
        let (options, timeline) = timed_options(start, 1000);
        let options = options.with_cancellation(token);

        let err = SequenceProcessor::new()
            .process_json(&json!([10, 20, 30, 40]), &options)
            .await
            .unwrap_err();

        assert_eq!(err, ProcessError::CancelledDuringDelay);
        let percents: Vec<u8> = timeline.lock().unwrap().iter().map(|(p, _)| *p).collect();
        assert_eq!(percents, vec![25, 50, 75]);
        assert_at(start.elapsed(), 2500);
    }

    #[tokio::test(start_paused = true)]
    async fn progress_is_monotonic_and_ends_at_100_for_many_lengths() {
        for n in [1usize, 2, 3, 7, 8, 13, 100, 200, 201, 1000] {
            let start = Instant::now();
            let (options, timeline) = timed_options(start, 1);
            let values: Vec<f64> = (0..n).map(|i| i as f64).collect();

            let outcome = SequenceProcessor::new()
                .process(&Sequence::new(values), &options)
                .await;

            assert_eq!(outcome, Ok(RunOutcome::Completed { processed: n }));
            let percents: Vec<u8> = timeline.lock().unwrap().iter().map(|(p, _)| *p).collect();
            assert_eq!(percents.len(), n, "n={}", n);
            assert!(percents.windows(2).all(|w| w[0] <= w[1]), "n={}", n);
            // past 200 items the first values round down to 0
            let floor = if n <= 200 { 1 } else { 0 };
            assert!(percents.iter().all(|p| (floor..=100).contains(p)), "n={}", n);
            assert_eq!(percents.last(), Some(&100), "n={}", n);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn long_sequences_report_zero_before_the_first_half_percent() {
        let start = Instant::now();
        let (options, timeline) = timed_options(start, 1);

        let outcome = SequenceProcessor::new()
            .process(&Sequence::new(vec![0.0; 1000]), &options)
            .await;

        assert_eq!(outcome, Ok(RunOutcome::Completed { processed: 1000 }));
        let percents: Vec<u8> = timeline.lock().unwrap().iter().map(|(p, _)| *p).collect();
        assert_eq!(percents.len(), 1000);
        assert_eq!(percents.iter().filter(|p| **p == 0).count(), 4);
        assert_eq!(percents[4], 1);
        assert_eq!(percents.last(), Some(&100));
    }

    #[tokio::test(start_paused = true)]
    async fn independent_tokens_do_not_interfere() {
        let doomed = CancellationToken::new();
        let untouched = CancellationToken::new();
        cancel_after(&doomed, 150);

        let processor = SequenceProcessor::new();
        let sequence = Sequence::new(vec![1.0, 2.0, 3.0, 4.0]);
        let first = ProcessOptions::default()
            .with_delay(Duration::from_millis(100))
            .with_cancellation(doomed);
        let second = ProcessOptions::default()
            .with_delay(Duration::from_millis(100))
            .with_cancellation(untouched);

        let (a, b) = tokio::join!(
            processor.process(&sequence, &first),
            processor.process(&sequence, &second),
        );

        assert_eq!(a, Err(ProcessError::CancelledDuringDelay));
        assert_eq!(b, Ok(RunOutcome::Completed { processed: 4 }));
    }

    #[tokio::test(start_paused = true)]
    async fn shared_token_stops_every_run_that_holds_it() {
        let shared = CancellationToken::new();
        cancel_after(&shared, 250);

        let options = ProcessOptions::default()
            .with_delay(Duration::from_millis(100))
            .with_cancellation(shared);
        let processor = SequenceProcessor::new();
        let short = Sequence::new(vec![1.0, 2.0]);
        let long = Sequence::new(vec![1.0; 10]);

        let (a, b) = tokio::join!(
            processor.process(&short, &options),
            processor.process(&long, &options),
        );

        // the short run is done at t=100, long before the cancel
        assert_eq!(a, Ok(RunOutcome::Completed { processed: 2 }));
        assert_eq!(b, Err(ProcessError::CancelledDuringDelay));
    }

    #[tokio::test(start_paused = true)]
    async fn spawned_runs_are_send() {
        let options = ProcessOptions::default().with_delay(Duration::from_millis(10));
        let handle = tokio::spawn(async move {
            SequenceProcessor::new()
                .process(&Sequence::new(vec![1.0, 2.0]), &options)
                .await
        });

        assert_eq!(handle.await.unwrap(), Ok(RunOutcome::Completed { processed: 2 }));
    }
}
