//! Cache Statistics Module
//!
//! Counters describing how the listing cache is behaving.

use serde::Serialize;

// == Cache Stats ==
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from a fresh entry
    pub hits: u64,
    /// Lookups that found nothing usable (absent or expired)
    pub misses: u64,
    /// Entries dropped to make room for a new key
    pub evictions: u64,
    /// Stale entries removed on access
    pub expirations: u64,
    /// Entries removed by explicit invalidation
    pub invalidations: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// An expired entry found on lookup is both an expiration and a miss.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_invalidation(&mut self) {
        self.invalidations += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
