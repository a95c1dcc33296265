// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::Instrument;

use crate::config::DirectoryConfig;
use crate::directory::model::{parse_users, User};
use crate::errors::DirectoryError;
use crate::observability::messages::{directory::*, StructuredLog};

/// Fetches the user list from a fixed endpoint.
///
/// One GET per call. No retries and no caching; the caller decides what to do
/// with a failure.
pub struct UserDirectoryClient {
    client: Client,
    endpoint: String,
}

impl UserDirectoryClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DirectoryError> {
        let endpoint = endpoint.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| DirectoryError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        Self::new(config.endpoint(), config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, DirectoryError> {
        let started = UsersFetchStarted {
            endpoint: &self.endpoint,
        };
        let span = started.span("users_fetch");
        started.log();

        let start = Instant::now();
        let result = self.fetch_inner().instrument(span).await;

        match &result {
            Ok(users) => UsersFetched {
                endpoint: &self.endpoint,
                count: users.len(),
                duration: start.elapsed(),
            }
            .log(),
            Err(error) => UsersFetchFailed {
                endpoint: &self.endpoint,
                error,
            }
            .log(),
        }

        result
    }

    async fn fetch_inner(&self) -> Result<Vec<User>, DirectoryError> {
        let transport = |source| DirectoryError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        parse_users(&body)
    }
}

impl std::fmt::Debug for UserDirectoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDirectoryClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
