//! Expiry Sweep Task
//!
//! Background task that periodically removes expired response cache entries.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;
use crate::error::{PokedexError, Result};

// == Sweep Handle ==
/// Handle for controlling a running sweep task.
///
/// Dropping the handle stops the task.
#[derive(Debug)]
pub struct SweepHandle {
    /// Sender to signal shutdown
    shutdown_tx: watch::Sender<bool>,
    /// The spawned task
    task: JoinHandle<()>,
}

impl SweepHandle {
    /// Signals the sweep task to stop. Calling this more than once is harmless.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawns a background task that removes expired entries every `period`.
///
/// The first sweep runs one full period after the call; later sweeps follow
/// at the same period. Each sweep holds the store lock for its whole scan.
/// The task runs until [`SweepHandle::stop`] is called or the handle is
/// dropped.
///
/// Fails with [`PokedexError::NoRuntime`] when called outside a tokio runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(Duration::from_secs(5))));
/// let sweeper = spawn_sweep_task(store.clone(), Duration::from_secs(5))?;
/// // Later:
/// sweeper.stop();
/// ```
pub fn spawn_sweep_task(store: Arc<Mutex<CacheStore>>, period: Duration) -> Result<SweepHandle> {
    let runtime = Handle::try_current().map_err(|_| PokedexError::NoRuntime)?;
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let task = runtime.spawn(run_sweep(store, period, shutdown_rx));

    Ok(SweepHandle { shutdown_tx, task })
}

async fn run_sweep(
    store: Arc<Mutex<CacheStore>>,
    period: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Starting cache sweep task with interval of {:?}", period);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let (removed, remaining) = {
                    let mut guard = store.lock();
                    let removed = guard.purge_expired();
                    (removed, guard.len())
                };

                if removed > 0 {
                    info!(removed, remaining, "Cache sweep: removed expired entries");
                } else {
                    debug!(remaining, "Cache sweep: no expired entries found");
                }
            }
            result = shutdown_rx.changed() => {
                if result.is_err() || *shutdown_rx.borrow() {
                    info!("Cache sweep task shutting down");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    const PERIOD: Duration = Duration::from_millis(50);

    fn shared_store() -> Arc<Mutex<CacheStore>> {
        Arc::new(Mutex::new(CacheStore::new(PERIOD)))
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_removes_expired_entries() {
        let store = shared_store();
        store
            .lock()
            .add("expire_soon".to_string(), Bytes::from_static(b"value"));

        let handle = spawn_sweep_task(store.clone(), PERIOD).unwrap();

        // First tick at 50ms sees an entry aged exactly 50ms.
        tokio::time::sleep(Duration::from_millis(75)).await;

        assert!(
            store.lock().get("expire_soon").is_none(),
            "Expired entry should have been swept"
        );
        assert_eq!(store.lock().stats().expired, 1);

        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_preserves_fresh_entries() {
        let store = shared_store();
        let handle = spawn_sweep_task(store.clone(), PERIOD).unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;
        store
            .lock()
            .add("fresh".to_string(), Bytes::from_static(b"value"));

        // Tick at 50ms sees the entry aged 20ms.
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(
            store.lock().get("fresh"),
            Some(Bytes::from_static(b"value")),
            "Fresh entry should not be removed"
        );

        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_can_be_stopped() {
        let handle = spawn_sweep_task(shared_store(), PERIOD).unwrap();

        handle.stop();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(handle.is_finished(), "Task should be finished after stop");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_releases_store() {
        let store = shared_store();
        let handle = spawn_sweep_task(store.clone(), PERIOD).unwrap();
        assert_eq!(Arc::strong_count(&store), 2);

        drop(handle);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(Arc::strong_count(&store), 1);
    }

    #[test]
    fn test_spawn_outside_runtime_fails() {
        let result = spawn_sweep_task(shared_store(), PERIOD);
        assert!(matches!(result, Err(PokedexError::NoRuntime)));
    }
}
