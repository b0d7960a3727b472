//! Persistent session-variable store.
//!
//! Variables live in one flat JSON object on disk. Every mutation rewrites
//! the whole file, so the file always holds a complete mapping.

use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// File name used under the home directory when no path is configured.
pub const DEFAULT_VARIABLES_FILE: &str = ".quiver.json";

/// Returns `~/.quiver.json` when a home directory is known.
pub fn default_variables_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_VARIABLES_FILE))
}

/// Name → value mapping in persisted key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionVariables {
    entries: Map<String, Value>,
}

impl SessionVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one variable. Replacing keeps the key's position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), Value::String(value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_str().map(|v| (name.as_str(), v)))
    }

    /// Merge `updates` over `self`, key by key.
    pub fn merge(&mut self, updates: &SessionVariables) {
        for (name, value) in updates.iter() {
            self.insert(name, value);
        }
    }

    fn from_json_text(text: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(text).map_err(|err| err.to_string())?;
        let Value::Object(entries) = value else {
            return Err("expected a JSON object at the top level".to_string());
        };
        if let Some((name, _)) = entries.iter().find(|(_, value)| !value.is_string()) {
            return Err(format!("value of `{name}` is not a string"));
        }
        Ok(Self { entries })
    }

    fn to_json_text(&self) -> String {
        Value::Object(self.entries.clone()).to_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SessionVariables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}

/// File-backed store for [`SessionVariables`].
#[derive(Debug, Clone)]
pub struct VariableStore {
    path: PathBuf,
}

impl VariableStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted mapping; a missing file is an empty mapping.
    pub fn load(&self) -> Result<SessionVariables, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => SessionVariables::from_json_text(&text).map_err(|err| {
                StoreError::Parse(format!("`{}`: {err}", self.path.display()))
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(SessionVariables::new()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    /// Insert-or-replace each update, then persist the full result.
    pub fn set(&self, updates: &SessionVariables) -> Result<(), StoreError> {
        let mut vars = self.load()?;
        vars.merge(updates);
        tracing::debug!(path = %self.path.display(), count = updates.len(), "updating variables");
        self.write(&vars)
    }

    /// Persist an empty mapping, discarding prior contents.
    pub fn clear(&self) -> Result<(), StoreError> {
        tracing::debug!(path = %self.path.display(), "clearing variables");
        self.write(&SessionVariables::new())
    }

    /// Entries for display, in persisted order.
    pub fn show(&self) -> Result<Vec<(String, String)>, StoreError> {
        Ok(self
            .load()?
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }

    fn write(&self, vars: &SessionVariables) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&self.path)?;
        file.write_all(vars.to_json_text().as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
