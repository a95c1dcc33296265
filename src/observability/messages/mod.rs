// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `sequence` - processing run lifecycle (items, progress, cancellation)
//! * `directory` - user directory fetches
//! * `preferences` - preference store reads and writes
//!
//! # Usage Pattern
//!
//! ```rust
//! use sequence_pacer::observability::messages::{sequence::RunStarted, StructuredLog};
//! use std::time::Duration;
//!
//! let msg = RunStarted {
//!     processor: "paced_sequence",
//!     item_count: 4,
//!     delay: Duration::from_millis(1000),
//! };
//!
//! msg.log();
//! ```

pub mod directory;
pub mod preferences;
pub mod sequence;

use tracing::Span;

/// A message that knows how to emit itself as a structured `tracing` event.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the event at the message's own level with its fields attached.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
