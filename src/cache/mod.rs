//! Cache Module
//!
//! Provides an in-memory response cache with a fixed TTL and background expiry.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use stats::CacheStats;
pub use store::{CacheStore, ReadMode};

use std::time::Duration;

// == Public Constants ==
/// Smallest sweep interval the reaper will run with
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);
