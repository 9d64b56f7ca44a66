//! Stale-while-revalidate query cache with per-identity fetch coalescing.
//!
//! Consumers never block on the network for a previously seen identity: a
//! read serves the last-known entry immediately and refreshes it in the
//! background, announcing the refresh on a broadcast channel. For any one
//! identity at most one fetch is in flight; a fetch whose generation was
//! superseded (by an invalidation or a direct write) has its result
//! discarded and runs again with the latest generation, so the last
//! triggered request always wins.

mod identity;

pub use identity::OperationIdentity;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Last-known response for one identity. Replaced wholesale on every
/// resolution, never merged.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub status: QueryStatus,
    pub data: Option<Value>,
    pub error: Option<Arc<Error>>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    fn loading() -> Self {
        Self {
            status: QueryStatus::Loading,
            data: None,
            error: None,
            fetched_at: None,
        }
    }

    fn resolve(&mut self, data: Value) {
        self.status = QueryStatus::Success;
        self.data = Some(data);
        self.error = None;
        self.fetched_at = Some(Utc::now());
    }

    /// A failure keeps previously cached `data` so a transient error does
    /// not blank a working view.
    fn fail(&mut self, error: Arc<Error>) {
        self.status = QueryStatus::Error;
        self.error = Some(error);
    }

    /// True only while the first fetch is outstanding with nothing cached.
    pub fn is_initial_loading(&self) -> bool {
        self.status == QueryStatus::Loading && self.data.is_none()
    }
}

/// Announcement that an identity's entry changed (settled or went stale).
#[derive(Debug, Clone)]
pub struct CacheUpdate {
    pub identity: OperationIdentity,
}

struct EntryState {
    entry: CacheEntry,
    /// Bumped whenever a newer request supersedes the outstanding one.
    generation: u64,
    inflight: bool,
}

struct Inner {
    states: Mutex<HashMap<OperationIdentity, EntryState>>,
    tx: broadcast::Sender<CacheUpdate>,
}

pub struct QueryCache {
    inner: Arc<Inner>,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// `capacity` sizes the update broadcast channel.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self {
            inner: Arc::new(Inner {
                states: Mutex::new(HashMap::new()),
                tx,
            }),
        }
    }

    /// Subscribe to entry-change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<CacheUpdate> {
        self.inner.tx.subscribe()
    }

    /// Current entry without triggering any fetch.
    pub fn peek(&self, identity: &OperationIdentity) -> Option<CacheEntry> {
        self.inner
            .states
            .lock()
            .get(identity)
            .map(|s| s.entry.clone())
    }

    /// Serve the last-known entry immediately and revalidate in the
    /// background. A first read creates a loading entry and fetches; while
    /// a fetch is outstanding further reads coalesce onto it.
    pub fn read<F, Fut>(&self, identity: &OperationIdentity, fetch: F) -> CacheEntry
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        let mut states = self.inner.states.lock();
        let state = states
            .entry(identity.clone())
            .or_insert_with(|| EntryState {
                entry: CacheEntry::loading(),
                generation: 0,
                inflight: false,
            });

        let snapshot = state.entry.clone();
        if !state.inflight {
            state.generation += 1;
            state.inflight = true;
            drop(states);
            self.spawn_worker(identity.clone(), fetch);
        }
        snapshot
    }

    /// Mark the entry stale and re-trigger a fetch. Cached `data` is kept
    /// until the new fetch resolves. When a fetch is already outstanding no
    /// duplicate call is issued; the outstanding one is superseded and will
    /// run again with the latest generation.
    pub fn invalidate<F, Fut>(&self, identity: &OperationIdentity, fetch: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        let mut states = self.inner.states.lock();
        let state = states
            .entry(identity.clone())
            .or_insert_with(|| EntryState {
                entry: CacheEntry::loading(),
                generation: 0,
                inflight: false,
            });

        state.entry.status = QueryStatus::Loading;
        state.generation += 1;
        let needs_fetch = !state.inflight;
        state.inflight = true;
        drop(states);

        debug!(identity = %identity, spawned = needs_fetch, "invalidated");
        if needs_fetch {
            self.spawn_worker(identity.clone(), fetch);
        }
        self.notify(identity);
    }

    /// Replace the entry wholesale with a successful payload. Supersedes
    /// any outstanding fetch for the identity.
    pub fn write(&self, identity: &OperationIdentity, data: Value) {
        {
            let mut states = self.inner.states.lock();
            let state = states
                .entry(identity.clone())
                .or_insert_with(|| EntryState {
                    entry: CacheEntry::loading(),
                    generation: 0,
                    inflight: false,
                });
            state.entry.resolve(data);
            state.generation += 1;
        }
        self.notify(identity);
    }

    /// Record a failure for the identity, preserving previously cached
    /// `data` if any.
    pub fn write_error(&self, identity: &OperationIdentity, error: Error) {
        {
            let mut states = self.inner.states.lock();
            let state = states
                .entry(identity.clone())
                .or_insert_with(|| EntryState {
                    entry: CacheEntry::loading(),
                    generation: 0,
                    inflight: false,
                });
            state.entry.fail(Arc::new(error));
            state.generation += 1;
        }
        self.notify(identity);
    }

    fn notify(&self, identity: &OperationIdentity) {
        // No receivers is fine.
        let _ = self.inner.tx.send(CacheUpdate {
            identity: identity.clone(),
        });
    }

    fn spawn_worker<F, Fut>(&self, identity: OperationIdentity, fetch: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            loop {
                let generation = {
                    let states = inner.states.lock();
                    match states.get(&identity) {
                        Some(state) => state.generation,
                        None => return,
                    }
                };

                let result = fetch().await;

                {
                    let mut states = inner.states.lock();
                    let Some(state) = states.get_mut(&identity) else {
                        return;
                    };
                    if state.generation != generation {
                        // Superseded while we were fetching; discard and
                        // run again with the latest generation.
                        debug!(identity = %identity, "discarding superseded result");
                        continue;
                    }
                    match result {
                        Ok(data) => state.entry.resolve(data),
                        Err(e) => {
                            debug!(identity = %identity, error = %e, "revalidation failed");
                            state.entry.fail(Arc::new(e));
                        }
                    }
                    state.inflight = false;
                }

                let _ = inner.tx.send(CacheUpdate {
                    identity: identity.clone(),
                });
                return;
            }
        });
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
