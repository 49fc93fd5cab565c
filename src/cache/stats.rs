//! Cache Statistics Module
//!
//! Tracks lookups and expiry removals for the response cache.

// == Cache Stats ==
/// Snapshot of cache counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    /// Lookups that returned a payload
    pub hits: u64,
    /// Lookups that found nothing (absent, or expired under strict reads)
    pub misses: u64,
    /// Entries removed because they outlived the TTL
    pub reaped: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Counts a lookup that returned a payload.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Counts a lookup that found nothing.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Reaped ==
    /// Adds `count` expired entries to the reaped counter.
    pub fn record_reaped(&mut self, count: usize) {
        self.reaped += count as u64;
    }

    // == Set Total Entries ==
    /// Records the entry count at the time of the snapshot.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
