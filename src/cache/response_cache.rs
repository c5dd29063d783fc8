//! Response Cache Module
//!
//! The concurrency-safe handle over [`CacheStore`] that API callers use.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::error::{PokedexError, Result};
use crate::tasks::{spawn_sweep_task, SweepHandle};

// == Response Cache ==
/// Time-expiring cache of raw API responses.
///
/// Every entry expires once its age reaches the interval given at
/// construction. Expired entries are removed only by a background sweep
/// that ticks once per interval, so an entry stays visible for at least one
/// interval and strictly less than two intervals after its last `add`.
///
/// All operations take one table-wide lock for their whole duration.
/// The sweep stops when the cache is dropped or [`shutdown`] is called.
///
/// The table has no capacity bound.
///
/// [`shutdown`]: ResponseCache::shutdown
#[derive(Debug)]
pub struct ResponseCache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    sweeper: SweepHandle,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache and starts its background sweep.
    ///
    /// # Errors
    /// - [`PokedexError::InvalidInterval`] if `interval` is zero
    /// - [`PokedexError::NoRuntime`] if called outside a tokio runtime
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidInterval);
        }

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let sweeper = spawn_sweep_task(store.clone(), interval)?;

        Ok(Self {
            store,
            interval,
            sweeper,
        })
    }

    // == Add ==
    /// Inserts or replaces the payload stored under `key`.
    ///
    /// Re-adding a key resets its expiration clock.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        debug!(key = %key, "Caching response");
        self.store.lock().add(key, value.into());
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    ///
    /// A hit does not extend the entry's lifetime and a stale entry is not
    /// removed. The only side effect is bumping the hit or miss counter in
    /// [`CacheStats`].
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let value = self.store.lock().get(key);
        debug!(key, hit = value.is_some(), "Cache lookup");
        value
    }

    // == Introspection ==
    /// Returns the fixed expiration interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the number of stored entries, including stale ones not yet swept.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Returns a snapshot of hit, miss and sweep counters.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    // == Shutdown ==
    /// Stops the background sweep. Entries already stored stay readable but
    /// are no longer expired.
    pub fn shutdown(&self) {
        self.sweeper.stop();
    }

    /// Returns true while the background sweep is running.
    pub fn is_sweeping(&self) -> bool {
        !self.sweeper.is_finished()
    }
}
