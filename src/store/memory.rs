//! In-memory state store for tests and ephemeral sessions.

use parking_lot::RwLock;
use std::collections::HashMap;

use super::StateStore;

/// Non-persistent backend; state lives for the process only.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_existing_value() {
        let store = MemoryStore::new();
        store.set("k", "one");
        store.set("k", "two");
        assert_eq!(store.get("k").as_deref(), Some("two"));
    }

    #[test]
    fn remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("k", "v");
        store.remove("k");
        store.remove("k");
        assert!(store.get("k").is_none());
    }
}
