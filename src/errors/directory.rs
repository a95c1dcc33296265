// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for fetching and decoding the user directory.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Connection, TLS or timeout failure talking to the endpoint.
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("Endpoint '{endpoint}' returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// The body was not a JSON array of user records.
    #[error("Failed to decode user list: {0}")]
    Decode(#[from] serde_json::Error),

    /// A sort or filter name given on the command line is not known.
    #[error("Unknown {kind} '{value}'")]
    UnknownOption { kind: &'static str, value: String },
}
