// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // YAML config + defaults
pub mod directory;     // user directory fetch + table view
pub mod engine;        // paced sequence processing
pub mod errors;        // error handling
pub mod observability;
pub mod preferences;   // persisted preferences (dark mode)
pub mod traits;        // processor + observer seams
