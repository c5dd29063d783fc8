//! Cache Store Module
//!
//! The entry table behind the response cache. The store is a plain data
//! structure; locking and the background sweep live in [`ResponseCache`].
//!
//! [`ResponseCache`]: crate::cache::ResponseCache

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Table of raw API responses keyed by request URL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Fixed expiration window, set once at construction
    interval: Duration,
    /// Lookup and sweep counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
            stats: CacheStats::new(),
        }
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamped with the current instant.
    ///
    /// Replacing an entry resets its age even if the payload is identical.
    pub fn add(&mut self, key: String, value: Bytes) {
        self.add_at(key, value, Instant::now());
    }

    /// Inserts or replaces the entry for `key` with an explicit creation instant.
    pub fn add_at(&mut self, key: String, value: Bytes, now: Instant) {
        self.entries.insert(key, CacheEntry::created_at(value, now));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Looks up `key`.
    ///
    /// Never refreshes the entry's age and never removes anything; an entry
    /// past its interval stays visible until the next sweep.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Purge Expired ==
    /// Removes every entry expired as of now. Returns the number removed.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    /// Removes every entry expired as of `now`. Returns the number removed.
    pub fn purge_expired_at(&mut self, now: Instant) -> usize {
        let interval = self.interval;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now, interval));

        let removed = before - self.entries.len();
        self.stats.record_expired(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Introspection ==
    /// Returns the fixed expiration interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the number of entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
