// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    APP_DIR_NAME, DEFAULT_DELAY_MS, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_USERS_ENDPOINT,
    PREFERENCES_FILE_NAME,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration file.
///
/// Every section and every field is optional; anything left out falls back to
/// the values in [`consts`](crate::config::consts). Command-line flags override
/// whatever the file says.
///
/// # Example
/// ```yaml
/// processing:
///   delay_ms: 1000
///   cancel_after_ms: 3500
/// directory:
///   endpoint: https://67f0a9ab2a80b06b889850a1.mockapi.io/api/users
///   timeout_seconds: 10
/// preferences:
///   path: /home/me/.config/sequence-pacer/preferences.json
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub processing: ProcessingConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

/// Settings for the `run` command.
///
/// # Fields
/// * `delay_ms` - Wait between items (defaults to 1000)
/// * `cancel_after_ms` - Cancel the run this long after it starts (never, if unset)
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessingConfig {
    pub delay_ms: Option<u64>,
    pub cancel_after_ms: Option<u64>,
}

impl ProcessingConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.unwrap_or(DEFAULT_DELAY_MS))
    }

    pub fn cancel_after(&self) -> Option<Duration> {
        self.cancel_after_ms.map(Duration::from_millis)
    }
}

/// Settings for the user directory fetch.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl DirectoryConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_USERS_ENDPOINT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECONDS))
    }
}

/// Where preferences live on disk.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreferencesConfig {
    pub path: Option<PathBuf>,
}

impl PreferencesConfig {
    pub fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_preferences_path)
    }
}

/// `$XDG_CONFIG_HOME/sequence-pacer/preferences.json`, falling back to
/// `$HOME/.config/...` and finally to the working directory.
pub fn default_preferences_path() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")));

    match base {
        Some(dir) => dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME),
        None => PathBuf::from(PREFERENCES_FILE_NAME),
    }
}

impl Config {
    /// Parse a YAML document and check value ranges.
    pub fn from_yaml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let cfg: Config = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.directory.timeout_seconds == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "directory.timeout_seconds",
                reason: "must be greater than zero".to_string(),
            });
        }
        if let Some(endpoint) = &self.directory.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: "directory.endpoint",
                    reason: format!("'{}' is not an http(s) URL", endpoint),
                });
            }
        }
        Ok(())
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_yaml(&content, path)
}
