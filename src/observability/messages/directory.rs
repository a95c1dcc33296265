// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for user directory fetches.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Fetch request sent.
///
/// # Log Level
/// `debug!`
pub struct UsersFetchStarted<'a> {
    pub endpoint: &'a str,
}

impl Display for UsersFetchStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Fetching users from '{}'", self.endpoint)
    }
}

impl StructuredLog for UsersFetchStarted<'_> {
    fn log(&self) {
        tracing::debug!(endpoint = self.endpoint, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("users_fetch", span_name = name, endpoint = self.endpoint)
    }
}

/// User list fetched and decoded.
///
/// # Log Level
/// `info!`
pub struct UsersFetched<'a> {
    pub endpoint: &'a str,
    pub count: usize,
    pub duration: Duration,
}

impl Display for UsersFetched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Fetched {} users from '{}' in {:?}",
            self.count, self.endpoint, self.duration
        )
    }
}

impl StructuredLog for UsersFetched<'_> {
    fn log(&self) {
        tracing::info!(
            endpoint = self.endpoint,
            count = self.count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "users_fetched",
            span_name = name,
            endpoint = self.endpoint,
            count = self.count,
        )
    }
}

/// Fetch or decode failed.
///
/// # Log Level
/// `error!`
pub struct UsersFetchFailed<'a> {
    pub endpoint: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for UsersFetchFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Error fetching data from '{}': {}", self.endpoint, self.error)
    }
}

impl StructuredLog for UsersFetchFailed<'_> {
    fn log(&self) {
        tracing::error!(
            endpoint = self.endpoint,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("users_fetch_failed", span_name = name, endpoint = self.endpoint)
    }
}
