//! String-keyed preference stores
//!
//! The engine only sees [`PreferenceStore`]; what backs it is up to the
//! caller. `MemoryStore` keeps values for the session, `FileStore` keeps
//! them in a JSON object file under the user's config directory.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Durable get/set by key, each call independent
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Write several keys; stores that can do this in one write override it
    fn set_all(&mut self, entries: &[(&str, String)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// In-process store, contents are lost with the process
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls served so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// JSON object file, rewritten whole on every change
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    ///
    /// An unreadable file, or one that is not a JSON object, is an error;
    /// it is left untouched so the user can repair it. A hand-edited entry
    /// whose value is not a string is kept as its JSON text, so
    /// `"fontSize": 20` reads back as `"20"`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            info!(path = %path.display(), "Preference store not found, starting empty");
            return Ok(Self { path, values: BTreeMap::new() });
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read preference store {}", path.display()))?;
        let raw: Map<String, Value> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse preference store {}", path.display()))?;

        let values: BTreeMap<String, String> = raw
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => (key, s),
                other => {
                    warn!(key = %key, value = %other, "Reading non-string store entry as JSON");
                    (key, other.to_string())
                }
            })
            .collect();

        debug!(path = %path.display(), keys = values.len(), "Opened preference store");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `values` to disk via a sibling temp file and rename
    fn write_file(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(values)
            .context("Failed to serialize preference store to JSON")?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!("Failed to replace preference store {}", self.path.display())
        })?;

        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_all(&[(key, value.to_string())])
    }

    fn set_all(&mut self, entries: &[(&str, String)]) -> Result<()> {
        let mut next = self.values.clone();
        for (key, value) in entries {
            next.insert((*key).to_string(), value.clone());
        }

        self.write_file(&next)?;
        self.values = next;
        debug!(path = %self.path.display(), keys = entries.len(), "Wrote preference store");
        Ok(())
    }
}
