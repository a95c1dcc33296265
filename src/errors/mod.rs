// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod directory;
mod preferences;
mod processing;

pub use config::ConfigError;
pub use directory::DirectoryError;
pub use preferences::PreferenceError;
pub use processing::{ProcessError, CANCELLED_DURING_DELAY};
