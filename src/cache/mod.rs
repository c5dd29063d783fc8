//! Cache Module
//!
//! Provides the time-expiring response cache: raw API payloads keyed by
//! request URL, removed by a background sweep once they reach the
//! configured interval.

mod entry;
mod response_cache;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use response_cache::ResponseCache;
pub use stats::CacheStats;
pub use store::CacheStore;
