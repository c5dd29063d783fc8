//! Cache Statistics Module
//!
//! Tracks lookup outcomes and sweep removals for the response cache.

// == Cache Stats ==
/// Counters describing how the response cache has been used.
///
/// These are observability counters only; they never influence which
/// entries live or die.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups that found nothing (never stored or already swept)
    pub misses: u64,
    /// Entries removed by the background sweep
    pub expired: u64,
    /// Current number of entries in the table
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Lookup ==
    /// Counts a lookup that found an entry.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Counts a lookup that found nothing.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Expired ==
    /// Adds the number of entries removed by one sweep tick.
    pub fn record_expired(&mut self, count: usize) {
        self.expired += count as u64;
    }

    /// Records the current table size.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
