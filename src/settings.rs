//! TOML-backed key/value settings
//!
//! Flat string-keyed settings store for pipeline runs. Values are kept
//! as strings on disk and coerced on access through [`ParseValue`], so a
//! file can mix numerics, booleans, and paths without a schema.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::fs::expand_tilde;
use crate::parse::ParseValue;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a TOML file; a missing file yields the empty store.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| SettingsError::FileIo {
            path: path.to_string_lossy().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| SettingsError::ParseFailed {
            path: path.to_string_lossy().to_string(),
            message: e.to_string(),
        })
    }

    /// Saves settings as TOML, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| SettingsError::FileIo {
                    path: parent.to_string_lossy().to_string(),
                    source,
                })?;
            }
        }

        let content = toml::to_string(self).map_err(|e| SettingsError::SerializeFailed {
            message: e.to_string(),
        })?;

        fs::write(path, content).map_err(|source| SettingsError::FileIo {
            path: path.to_string_lossy().to_string(),
            source,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Typed access; missing and unparseable values are errors.
    pub fn get_parsed<T: ParseValue>(&self, key: &str) -> Result<T, SettingsError> {
        let raw = self.values.get(key).ok_or_else(|| SettingsError::MissingKey {
            key: key.to_string(),
        })?;
        T::parse_value(raw).map_err(|source| SettingsError::InvalidValue {
            key: key.to_string(),
            source,
        })
    }

    /// Typed access with a fallback; an unparseable value warns and falls back.
    pub fn get_or<T: ParseValue>(&self, key: &str, default: T) -> T {
        match self.get_parsed::<T>(key) {
            Ok(v) => v,
            Err(SettingsError::MissingKey { .. }) => default,
            Err(e) => {
                log::warn!("{e}; using the default");
                default
            }
        }
    }

    /// Path-valued access, with `~` expanded to the home directory.
    pub fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.values.get(key).map(|v| expand_tilde(v))
    }
}
