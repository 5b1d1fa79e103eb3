//! Persisted settings.
//!
//! The simulation and layout never talk to platform storage directly; they
//! go through an injected key-value provider. The shipped implementation is
//! a small JSON file, flushed on every write like a preferences store. An
//! in-memory implementation backs the tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Key-value store for numeric preferences.
pub trait SettingsProvider {
    /// Read a value, falling back to `default` when the key is absent.
    fn get_f32(&self, key: &str, default: f32) -> f32;

    /// Write a value and persist it.
    fn set_f32(&mut self, key: &str, value: f32);
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsData {
    #[serde(flatten)]
    values: HashMap<String, f32>,
}

/// JSON-file-backed settings store.
///
/// The file is read once at construction; every `set_f32` rewrites it.
/// A missing or unreadable file degrades to defaults with a logged warning.
#[derive(Debug)]
pub struct JsonFileSettings {
    path: PathBuf,
    data: SettingsData,
}

impl JsonFileSettings {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(data) => data,
                Err(err) => {
                    log::warn!("ignoring malformed settings file {}: {err}", path.display());
                    SettingsData::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => SettingsData::default(),
            Err(err) => {
                log::warn!("could not read settings file {}: {err}", path.display());
                SettingsData::default()
            }
        };
        Self { path, data }
    }

    fn flush(&self) {
        let raw = match serde_json::to_string_pretty(&self.data) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("could not serialize settings: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, raw) {
            log::warn!("could not write settings file {}: {err}", self.path.display());
        }
    }
}

impl SettingsProvider for JsonFileSettings {
    fn get_f32(&self, key: &str, default: f32) -> f32 {
        self.data.values.get(key).copied().unwrap_or(default)
    }

    fn set_f32(&mut self, key: &str, value: f32) {
        self.data.values.insert(key.to_string(), value);
        self.flush();
    }
}

/// Volatile settings store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: HashMap<String, f32>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsProvider for MemorySettings {
    fn get_f32(&self, key: &str, default: f32) -> f32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_f32(&mut self, key: &str, value: f32) {
        self.values.insert(key.to_string(), value);
    }
}
