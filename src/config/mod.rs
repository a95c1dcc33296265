// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
pub mod consts;

pub use loader::{
    default_preferences_path, load_config, Config, DirectoryConfig, PreferencesConfig,
    ProcessingConfig,
};
