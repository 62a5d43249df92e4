//! External key/value settings store.
//!
//! The shell only reads from the store; whoever owns the preference (a
//! desktop integration script, another tool, a test) writes it. Values are
//! plain strings keyed by name, grouped per organization/application pair.

#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::warn;

use super::error::{AppError, Result};

pub trait SettingsStore {
    /// Current value stored under `key`, or `None` when the key is absent
    /// or the store cannot be read.
    fn value(&self, key: &str) -> Option<String>;

    fn set_value(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store backed by a flat JSON object at
/// `<config_dir>/<organization>/<application>.json`.
///
/// The file is re-read on every lookup so edits made by other processes are
/// picked up by the next poll.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn open(organization: &str, application: &str) -> Self {
        Self::at_path(Self::store_path(organization, application))
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get store file path (cross-platform)
    pub fn store_path(organization: &str, application: &str) -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(organization);
        path.push(format!("{}.json", application));
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole store. A missing file is an empty store.
    pub fn load(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&contents)? {
            Value::Object(map) => Ok(map),
            _ => Err(AppError::Settings(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn value(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(map) => map.get(key).map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read settings store");
                None
            }
        }
    }

    fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load()?;
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Value::Object(map))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-process store, used where no file should be touched.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

#[cfg(test)]
impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl SettingsStore for MemorySettingsStore {
    fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
