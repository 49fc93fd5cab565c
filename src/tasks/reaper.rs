//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

// == Reaper Handle ==
/// Owner-side control for a running reaper.
///
/// Dropping the handle does not stop the task; the reaper keeps running until
/// [`ReaperHandle::shutdown`] is called or the cache itself is dropped.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Signals the reaper to stop and waits for it to exit.
    pub async fn shutdown(self) {
        self.shutdown.notify_one();
        // Join only fails on panic or abort; neither happens here
        let _ = self.task.await;
    }

    /// Returns true once the reaper loop has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns the reaper for `store`.
///
/// Every `interval` the task takes the store lock once and drops every entry
/// older than the store's TTL. The first sweep happens one full interval
/// after spawning. If a sweep runs long, the next tick is delayed rather than
/// fired in a burst.
///
/// The task holds only a weak reference, so it exits by itself once every
/// [`Cache`](crate::cache::Cache) handle has been dropped.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_reaper(store: Weak<Mutex<CacheStore>>, interval: Duration) -> ReaperHandle {
    let shutdown = Arc::new(Notify::new());
    let signal = shutdown.clone();

    let task = tokio::spawn(async move {
        debug!(interval_ms = interval.as_millis() as u64, "Starting cache reaper");

        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let Some(shared) = store.upgrade() else {
                        debug!("Cache dropped, reaper exiting");
                        break;
                    };

                    let removed = shared.lock().await.reap_expired();

                    if removed > 0 {
                        info!("Cache reaper: removed {} expired entries", removed);
                    } else {
                        debug!("Cache reaper: no expired entries found");
                    }
                }
                _ = signal.notified() => {
                    debug!("Cache reaper shutting down");
                    break;
                }
            }
        }
    });

    ReaperHandle { shutdown, task }
}
