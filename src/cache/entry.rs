//! Cache Entry Module
//!
//! Defines a single cached response body and the moment it was stored.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A cached payload together with its insertion time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The verbatim response body
    pub payload: Bytes,
    /// When the entry was stored
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(payload: Bytes) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago the entry was stored.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is still
    /// live. It only becomes expired once its age is strictly greater.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_keeps_payload() {
        let entry = CacheEntry::new(Bytes::from_static(b"testdata"));
        assert_eq!(entry.payload, Bytes::from_static(b"testdata"));
    }

    #[test]
    fn test_fresh_entry_not_expired() {
        let entry = CacheEntry::new(Bytes::from_static(b"testdata"));
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let entry = CacheEntry::new(Bytes::from_static(b"testdata"));

        tokio::time::advance(Duration::from_millis(5)).await;
        assert!(!entry.is_expired(Duration::from_millis(5)), "age == ttl is still live");

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(entry.is_expired(Duration::from_millis(5)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_ttl_expires_once_time_moves() {
        let entry = CacheEntry::new(Bytes::new());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(entry.is_expired(Duration::ZERO));
    }
}
