//! JSON-file state store.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::StateStore;
use crate::error::Result;

/// Durable backend: the whole namespace is one JSON object on disk,
/// rewritten on every mutation. Small enough (three keys) that this is
/// cheaper than anything incremental.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or create) the store at `path`. A missing file is an empty
    /// namespace; a corrupt file is treated the same after a warning, since
    /// every key's absence is a valid "unset" state.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "state file unreadable, starting empty");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) {
        match serde_json::to_string_pretty(entries) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    warn!(path = %self.path.display(), error = %e, "failed to persist state");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize state"),
        }
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn survives_reopen() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("state.json");

        {
            let store = FileStore::open(&path).expect("open");
            store.set("codefolio.token", "abc");
        }

        let store = FileStore::open(&path).expect("reopen");
        assert_eq!(store.get("codefolio.token").as_deref(), Some("abc"));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").expect("write garbage");

        let store = FileStore::open(&path).expect("open");
        assert!(store.get("codefolio.token").is_none());
    }

    #[test]
    fn remove_persists() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("state.json");

        {
            let store = FileStore::open(&path).expect("open");
            store.set("k", "v");
            store.remove("k");
        }

        let store = FileStore::open(&path).expect("reopen");
        assert!(store.get("k").is_none());
    }
}
