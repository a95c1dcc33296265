// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DirectoryError;

/// One row of the user directory.
///
/// Field names follow the remote API (`registerAt` is camelCase on the wire
/// and must be an RFC 3339 timestamp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub balance: f64,
    pub email: String,
    pub register_at: DateTime<Utc>,
    pub active: bool,
}

/// Decode a JSON array of users.
pub fn parse_users(body: &str) -> Result<Vec<User>, DirectoryError> {
    Ok(serde_json::from_str(body)?)
}
