// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Which side of the [`wait_or_cancel`] race fired first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The full delay elapsed.
    Elapsed,
    /// The token was cancelled before the delay elapsed.
    Cancelled,
}

/// Sleep for `delay` unless `token` is cancelled first.
///
/// Without a token this is a plain sleep. A token that is already cancelled
/// wins immediately.
pub async fn wait_or_cancel(delay: Duration, token: Option<&CancellationToken>) -> WaitOutcome {
    let Some(token) = token else {
        tokio::time::sleep(delay).await;
        return WaitOutcome::Elapsed;
    };

    tokio::select! {
        biased;
        _ = token.cancelled() => WaitOutcome::Cancelled,
        _ = tokio::time::sleep(delay) => WaitOutcome::Elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn elapses_without_token() {
        let start = Instant::now();
        let outcome = wait_or_cancel(Duration::from_millis(250), None).await;

        assert_eq!(outcome, WaitOutcome::Elapsed);
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn elapses_when_token_stays_quiet() {
        let token = CancellationToken::new();
        let outcome = wait_or_cancel(Duration::from_millis(100), Some(&token)).await;
        assert_eq!(outcome, WaitOutcome::Elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_cuts_the_wait_short() {
        let token = CancellationToken::new();
        let trigger = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            trigger.cancel();
        });

        let start = Instant::now();
        let outcome = wait_or_cancel(Duration::from_secs(10), Some(&token)).await;

        assert_eq!(outcome, WaitOutcome::Cancelled);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn already_cancelled_token_wins_immediately() {
        let token = CancellationToken::new();
        token.cancel();

        let start = Instant::now();
        let outcome = wait_or_cancel(Duration::from_secs(5), Some(&token)).await;

        assert_eq!(outcome, WaitOutcome::Cancelled);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
