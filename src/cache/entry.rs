//! Cache Entry Module
//!
//! Defines a single cached API response and its expiry rule.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A raw response payload stamped with the instant it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, exactly as given
    pub value: Bytes,
    /// Insertion instant (tokio clock, so paused-time tests control it)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Bytes) -> Self {
        Self::created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit creation instant.
    pub fn created_at(value: Bytes, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the creation instant.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is expired at `now` for the given interval.
    ///
    /// Boundary condition: an entry is expired once its age is greater than
    /// or equal to the interval. An entry whose age is exactly the interval
    /// is expired.
    pub fn is_expired_at(&self, now: Instant, interval: Duration) -> bool {
        self.age_at(now) >= interval
    }
}
