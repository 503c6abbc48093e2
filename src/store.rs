//! Persisted key/value store
//!
//! A small JSON object file holding values that survive process restarts
//! (currently just the last search query). Writes go through the in-memory
//! map first, so the session always sees its own writes even when the disk
//! write fails; persistence failures are logged and otherwise swallowed.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::logging;

pub struct ValueStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl ValueStore {
    /// Open a store backed by `path`. A missing or unreadable file starts
    /// the session with an empty map.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    /// Default store location: `~/.hnsearch/state.json`, falling back to
    /// the working directory when no home directory is resolvable.
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hnsearch")
            .join("state.json")
    }

    /// Return the stored value, or `fallback` if the key is absent.
    pub fn get(&self, key: &str, fallback: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Store `value` under `key` and write through to disk. The in-memory
    /// value stays authoritative for the session even if the write fails.
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            logging::warn(
                "STORE",
                &format!("failed to persist {}: {}", self.path.display(), e),
            );
        }
    }

    fn persist(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.values).map_err(std::io::Error::other)?;
        fs::write(&self.path, text)
    }
}
