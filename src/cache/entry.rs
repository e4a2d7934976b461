//! Cache Entry Module
//!
//! A stored value stamped with its insertion time.

// == Cache Entry ==
/// Represents a single cache entry with its creation timestamp.
///
/// Entries carry no expiry of their own; the owning store applies one TTL
/// to every entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    pub fn new(value: V, created_at: u64) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Milliseconds elapsed since insertion. A clock that went backwards
    /// yields an age of 0.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl_ms`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is expired.
    pub fn is_expired(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) >= ttl_ms
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_entry_is_not_expired() {
        let entry = CacheEntry::new("listing", 10_000);
        assert!(!entry.is_expired(10_000, 30_000));
        assert!(!entry.is_expired(39_999, 30_000));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("listing", 10_000);
        assert!(
            entry.is_expired(40_000, 30_000),
            "Entry should be expired exactly at the TTL"
        );
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let entry = CacheEntry::new(1u8, 500);
        assert!(entry.is_expired(500, 0));
    }

    #[test]
    fn test_clock_skew_reads_as_fresh() {
        let entry = CacheEntry::new(1u8, 5_000);
        assert_eq!(entry.age_ms(1_000), 0);
        assert!(!entry.is_expired(1_000, 30_000));
    }
}
