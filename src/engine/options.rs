// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::config::consts::DEFAULT_DELAY_MS;
use crate::config::ProcessingConfig;
use crate::traits::ProgressObserver;

/// Per-run configuration for [`SequenceProcessor`](crate::engine::SequenceProcessor).
///
/// Both the observer and the token are optional; a default `ProcessOptions`
/// waits one second between items and can't be cancelled.
///
/// # Example
/// ```
/// use sequence_pacer::engine::ProcessOptions;
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let options = ProcessOptions::default()
///     .with_delay(Duration::from_millis(250))
///     .with_progress(|percent: u8| println!("Progress: {}%", percent))
///     .with_cancellation(token.clone());
///
/// assert_eq!(options.delay, Duration::from_millis(250));
/// ```
#[derive(Clone)]
pub struct ProcessOptions {
    pub delay: Duration,
    pub on_progress: Option<Arc<dyn ProgressObserver>>,
    pub cancellation: Option<CancellationToken>,
}

impl ProcessOptions {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_progress<O>(mut self, observer: O) -> Self
    where
        O: ProgressObserver + 'static,
    {
        self.on_progress = Some(Arc::new(observer));
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Options seeded from the `processing` section of the config file.
    pub fn from_config(config: &ProcessingConfig) -> Self {
        Self::default().with_delay(config.delay())
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            on_progress: None,
            cancellation: None,
        }
    }
}

impl std::fmt::Debug for ProcessOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessOptions")
            .field("delay", &self.delay)
            .field("has_progress_observer", &self.on_progress.is_some())
            .field("cancellation", &self.cancellation.as_ref().map(|t| t.is_cancelled()))
            .finish()
    }
}
