//! Shared Cache Handle
//!
//! [`Cache`] is the cloneable, concurrency-safe face of a [`CacheStore`]. All
//! access goes through one mutex, and a reaper task sweeps the store in the
//! background.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::Mutex;

use crate::cache::{CacheStats, CacheStore, ReadMode, MIN_SWEEP_INTERVAL};
use crate::tasks::{spawn_reaper, ReaperHandle};

// == Cache ==
/// Expiring response cache keyed by request URL.
///
/// Cloning is cheap; every clone refers to the same entries.
///
/// There is no capacity limit. The cache is meant for the handful of distinct
/// URLs an interactive session touches, and it grows without bound if fed an
/// unbounded key space.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache in [`ReadMode::Lenient`] and starts its reaper.
    ///
    /// See [`Cache::with_read_mode`].
    pub fn new(ttl: Duration, sweep_interval: Duration) -> (Self, ReaperHandle) {
        Self::with_read_mode(ttl, sweep_interval, ReadMode::Lenient)
    }

    /// Creates an empty cache and starts its reaper.
    ///
    /// Entries older than `ttl` are removed by a sweep every `sweep_interval`,
    /// so an entry may outlive its TTL by up to one interval. A zero
    /// `sweep_interval` is raised to [`MIN_SWEEP_INTERVAL`]. A zero `ttl` is
    /// accepted and leaves every entry eligible for the next sweep.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_read_mode(
        ttl: Duration,
        sweep_interval: Duration,
        read_mode: ReadMode,
    ) -> (Self, ReaperHandle) {
        let store = Arc::new(Mutex::new(CacheStore::new(ttl, read_mode)));
        let reaper = spawn_reaper(
            Arc::downgrade(&store),
            sweep_interval.max(MIN_SWEEP_INTERVAL),
        );

        (Self { store }, reaper)
    }

    // == Add ==
    /// Stores `payload` under `key`, replacing any previous entry and
    /// restarting its expiry clock.
    pub async fn add(&self, key: impl Into<String>, payload: impl Into<Bytes>) {
        let key = key.into();
        let payload = payload.into();
        self.store.lock().await.add(key, payload);
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    ///
    /// In lenient mode an entry past its TTL is still returned until the
    /// reaper removes it.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.store.lock().await.get(key)
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included until swept.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }
}
