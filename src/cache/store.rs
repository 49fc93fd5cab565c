//! Cache Store Module
//!
//! The entry map itself. A `CacheStore` is never shared directly; it lives
//! behind the single lock owned by [`Cache`](super::Cache), so every method
//! here runs inside one critical section.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;

use crate::cache::{CacheEntry, CacheStats};

// == Read Mode ==
/// How the read path treats entries that are past their TTL but not yet reaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// Trust the map; expired entries stay visible until the next sweep.
    #[default]
    Lenient,
    /// Check the entry's age on every lookup and treat expired entries as misses.
    Strict,
}

// == Cache Store ==
/// Response payloads keyed by request URL, with a fixed TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Time-to-live applied to every entry
    ttl: Duration,
    /// Read path policy
    read_mode: ReadMode,
    /// Lookup and expiry counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new(ttl: Duration, read_mode: ReadMode) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            read_mode,
            stats: CacheStats::new(),
        }
    }

    // == Add ==
    /// Stores `payload` under `key`.
    ///
    /// If the key already exists the payload is replaced and its expiry clock
    /// restarts from now.
    pub fn add(&mut self, key: String, payload: Bytes) {
        self.entries.insert(key, CacheEntry::new(payload));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Looks up `key`.
    ///
    /// In [`ReadMode::Lenient`] the entry's age is not checked. In
    /// [`ReadMode::Strict`] an expired entry is dropped and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        let expired = match self.entries.get(key) {
            Some(entry) => self.read_mode == ReadMode::Strict && entry.is_expired(self.ttl),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_reaped(1);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.payload.clone())
    }

    // == Reap Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == TTL ==
    /// Returns the time-to-live applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Read Mode ==
    /// Returns whether reads check entry age.
    pub fn read_mode(&self) -> ReadMode {
        self.read_mode
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
