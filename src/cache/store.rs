//! Cache Store Module
//!
//! Bounded key-value store with one TTL for every entry, lazy expiry and
//! least-recently-used capacity eviction.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, Clock, RecencyOrder};

// == Cache Store ==
/// In-memory TTL cache. Every operation is infallible and does no I/O.
///
/// Expired entries are only removed when they are looked up; nothing sweeps
/// the store in the background.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Eviction order
    recency: RecencyOrder<String>,
    stats: CacheStats,
    /// Maximum number of entries allowed, at least 1
    max_entries: usize,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a store holding at most `max_entries` entries, each living
    /// for `ttl`. A capacity of 0 is treated as 1.
    pub fn new(max_entries: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            recency: RecencyOrder::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            ttl,
            clock,
        }
    }

    fn ttl_ms(&self) -> u64 {
        self.ttl.as_millis() as u64
    }

    // == Put ==
    /// Stores `value` under `key`, stamped with the current time.
    ///
    /// Overwriting an existing key resets its timestamp. Inserting a new key
    /// into a full store evicts the least recently used entry first.
    pub fn put(&mut self, key: String, value: V) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(victim) = self.recency.pop_least_recent() {
                self.entries.remove(&victim);
                self.stats.record_eviction();
            }
        }

        let entry = CacheEntry::new(value, self.clock.now_ms());
        self.entries.insert(key.clone(), entry);
        self.recency.mark_used(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the value for `key` if it exists and is younger than the TTL.
    ///
    /// A stale entry is removed as part of the lookup and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();
        let ttl_ms = self.ttl_ms();

        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired(now, ttl_ms) {
            self.remove_entry(key);
            self.stats.record_expiration();
            return None;
        }

        let value = entry.value.clone();
        self.stats.record_hit();
        self.recency.mark_used(&key.to_string());
        Some(value)
    }

    // == Invalidate ==
    /// Removes any entry for `key`. Returns whether something was removed;
    /// invalidating an absent key is a no-op.
    pub fn invalidate(&mut self, key: &str) -> bool {
        let removed = self.remove_entry(key);
        if removed {
            self.stats.record_invalidation();
        }
        removed
    }

    /// True when `key` holds a fresh entry. Does not touch recency, stats or
    /// stale entries.
    pub fn contains_fresh(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now, self.ttl_ms()))
    }

    fn remove_entry(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.recency.forget(&key.to_string());
            self.stats.set_total_entries(self.entries.len());
            true
        } else {
            false
        }
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    /// Number of stored entries, stale ones included until they are looked up.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
