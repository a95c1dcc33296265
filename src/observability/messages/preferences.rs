// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the preference store.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// A preference value was written to disk.
///
/// # Log Level
/// `info!`
pub struct PreferenceSaved<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub path: &'a Path,
}

impl Display for PreferenceSaved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Saved preference '{}'='{}' to {}",
            self.key,
            self.value,
            self.path.display()
        )
    }
}

impl StructuredLog for PreferenceSaved<'_> {
    fn log(&self) {
        tracing::info!(
            key = self.key,
            value = self.value,
            path = %self.path.display(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("preference_saved", span_name = name, key = self.key)
    }
}

/// No preference file exists yet; defaults apply.
///
/// # Log Level
/// `debug!`
pub struct PreferenceFileMissing<'a> {
    pub path: &'a Path,
}

impl Display for PreferenceFileMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Preference file {} not found, using defaults",
            self.path.display()
        )
    }
}

impl StructuredLog for PreferenceFileMissing<'_> {
    fn log(&self) {
        tracing::debug!(path = %self.path.display(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("preference_file_missing", span_name = name)
    }
}
