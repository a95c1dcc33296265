// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::consts::DARK_MODE_KEY;
use crate::errors::PreferenceError;
use crate::observability::messages::{preferences::*, StructuredLog};

/// String key/value preferences persisted as a flat JSON object.
///
/// Values are strings, the same way a browser's local storage holds them, so
/// `darkMode` is stored as `"true"` or `"false"`. Every call reads or writes
/// the file; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored preferences. A missing file is an empty map.
    pub fn load(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                PreferenceFileMissing { path: &self.path }.log();
                return Ok(BTreeMap::new());
            }
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| PreferenceError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.load()?.remove(key))
    }

    /// Store `value` under `key`, keeping every other entry.
    pub fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)?;

        PreferenceSaved {
            key,
            value,
            path: &self.path,
        }
        .log();
        Ok(())
    }

    /// Dark mode is on only when the stored value is exactly `"true"`.
    pub fn dark_mode(&self) -> Result<bool, PreferenceError> {
        Ok(self.get(DARK_MODE_KEY)?.as_deref() == Some("true"))
    }

    pub fn set_dark_mode(&self, enabled: bool) -> Result<(), PreferenceError> {
        self.set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
    }

    /// Flip the dark mode flag and return the new value.
    pub fn toggle_dark_mode(&self) -> Result<bool, PreferenceError> {
        let enabled = !self.dark_mode()?;
        self.set_dark_mode(enabled)?;
        Ok(enabled)
    }

    // Write to a sibling temp file and rename over the target.
    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let io_err = |source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let body = serde_json::to_string_pretty(entries).map_err(|source| {
            PreferenceError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, body).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}
