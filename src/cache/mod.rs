//! Cache Module
//!
//! In-memory caching with a single TTL, lazy expiry and LRU eviction.

mod clock;
mod entry;
mod recency;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use recency::RecencyOrder;
pub use stats::CacheStats;
pub use store::CacheStore;
