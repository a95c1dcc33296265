// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic line emitted by the crate is a message struct defined under
//! [`messages`]. Each one implements `Display` for the human-readable text and
//! [`messages::StructuredLog`] for the structured `tracing` event, so call sites
//! never format log strings inline.
//!
//! # Usage
//!
//! ```rust
//! use sequence_pacer::observability::messages::{sequence::ItemProcessing, StructuredLog};
//!
//! ItemProcessing { index: 0, value: 10.0 }.log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` is used. Calling this
/// twice is harmless, the second install is ignored.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
