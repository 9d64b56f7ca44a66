//! Persisted client state with pluggable storage backends.
//!
//! A flat, origin-scoped key/value namespace: the auth token, the theme
//! preference, and an optional cached user object each live under one
//! well-known key. Absence of a key is always a valid state meaning
//! "unset" — there is no schema versioning.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Well-known keys in the persisted state namespace.
pub mod keys {
    pub const TOKEN: &str = "codefolio.token";
    pub const THEME: &str = "codefolio.theme";
    pub const USER: &str = "codefolio.user";
}

/// Synchronous string key/value storage.
///
/// Implementations must be thread-safe; callers share one instance for the
/// whole process lifetime.
pub trait StateStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Read the stored theme preference, if any.
pub fn theme(store: &dyn StateStore) -> Option<Theme> {
    store.get(keys::THEME).as_deref().and_then(Theme::parse)
}

/// Persist the theme preference.
pub fn set_theme(store: &dyn StateStore, theme: Theme) {
    store.set(keys::THEME, theme.as_str());
}
