//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check TTL, invalidation and eviction behaviour over
//! generated operation sequences. Time is driven by a `ManualClock`.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheStore, Clock, ManualClock};

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;
const TEST_TTL_MS: u64 = 30_000;
const START_MS: u64 = 1_700_000_000_000;

fn new_store(max_entries: usize) -> (CacheStore<String>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(START_MS));
    let store = CacheStore::new(
        max_entries,
        Duration::from_millis(TEST_TTL_MS),
        clock.clone(),
    );
    (store, clock)
}

// == Strategies ==
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
    Invalidate { key: String },
    Advance { ms: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Invalidate { key }),
        (0u64..40_000).prop_map(|ms| CacheOp::Advance { ms }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // A lookup misses exactly when the entry's age has reached the TTL.
    #[test]
    fn prop_ttl_boundary(
        key in key_strategy(),
        value in value_strategy(),
        elapsed in 0u64..(TEST_TTL_MS * 2)
    ) {
        let (mut store, clock) = new_store(TEST_MAX_ENTRIES);

        store.put(key.clone(), value.clone());
        clock.advance(Duration::from_millis(elapsed));

        let result = store.get(&key);
        if elapsed >= TEST_TTL_MS {
            prop_assert_eq!(result, None, "entry aged {}ms should be expired", elapsed);
            prop_assert!(store.is_empty(), "stale entry should be evicted on access");
        } else {
            prop_assert_eq!(result, Some(value));
        }
    }

    // Against a model of (value, inserted_at), every lookup agrees on hit or miss.
    #[test]
    fn prop_matches_reference_model(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let (mut store, clock) = new_store(TEST_MAX_ENTRIES);
        let mut model: std::collections::HashMap<String, (String, u64)> = Default::default();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put(key.clone(), value.clone());
                    model.insert(key, (value, clock.now_ms()));
                }
                CacheOp::Get { key } => {
                    let now = clock.now_ms();
                    let expected = model
                        .get(&key)
                        .filter(|(_, at)| now - at < TEST_TTL_MS)
                        .map(|(value, _)| value.clone());
                    if expected.is_none() {
                        model.remove(&key);
                    }
                    prop_assert_eq!(store.get(&key), expected);
                }
                CacheOp::Invalidate { key } => {
                    let existed = model.remove(&key).is_some();
                    prop_assert_eq!(store.invalidate(&key), existed);
                }
                CacheOp::Advance { ms } => clock.advance(Duration::from_millis(ms)),
            }
        }
    }

    // Invalidating a key that is not there never panics and changes nothing.
    #[test]
    fn prop_invalidate_absent_is_noop(
        present in prop::collection::hash_set(key_strategy(), 0..10),
        absent in key_strategy()
    ) {
        prop_assume!(!present.contains(&absent));
        let (mut store, _) = new_store(TEST_MAX_ENTRIES);
        for key in &present {
            store.put(key.clone(), format!("value_{}", key));
        }
        let before = store.stats();

        prop_assert!(!store.invalidate(&absent));
        prop_assert!(!store.invalidate(&absent));

        prop_assert_eq!(store.len(), present.len());
        prop_assert_eq!(store.stats(), before);
    }

    // Each new key into a full store evicts exactly one prior entry and
    // the new key always survives.
    #[test]
    fn prop_capacity_evicts_exactly_one(
        keys in prop::collection::vec(key_strategy(), 1..60),
        capacity in 1usize..10
    ) {
        let (mut store, _) = new_store(capacity);
        let mut seen: HashSet<String> = HashSet::new();

        for key in keys {
            let before_len = store.len();
            let before_evictions = store.stats().evictions;
            let is_new = !seen.contains(&key);

            store.put(key.clone(), "v".to_string());
            seen.insert(key.clone());

            let evicted = store.stats().evictions - before_evictions;
            if is_new && before_len == capacity {
                prop_assert_eq!(evicted, 1);
                prop_assert_eq!(store.len(), capacity);
            } else {
                prop_assert_eq!(evicted, 0);
            }
            prop_assert!(store.len() <= capacity);
            prop_assert!(store.contains_fresh(&key), "just-inserted key was evicted");

            // keep the tracked set in line with what is actually stored
            seen.retain(|k| store.contains_fresh(k));
        }
    }
}

// == Concurrency ==
// Readers sharing the store through Arc<RwLock<_>> see either a complete
// listing or nothing, never a partial one.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn prop_concurrent_reads_see_whole_values(
        listings in prop::collection::vec(prop::collection::vec(0u32..1000, 1..20), 1..10)
    ) {
        use tokio::sync::RwLock;

        let valid: HashSet<Vec<u32>> = listings.iter().cloned().collect();

        let torn = tokio_test::block_on(async move {
            let clock = Arc::new(ManualClock::new(START_MS));
            let store: Arc<RwLock<CacheStore<Vec<u32>>>> = Arc::new(RwLock::new(
                CacheStore::new(TEST_MAX_ENTRIES, Duration::from_millis(TEST_TTL_MS), clock),
            ));

            let mut writers = Vec::new();
            for listing in listings {
                let store = Arc::clone(&store);
                writers.push(tokio::spawn(async move {
                    let mut cache = store.write().await;
                    cache.invalidate("students");
                    cache.put("students".to_string(), listing);
                }));
            }

            let mut readers = Vec::new();
            for _ in 0..20 {
                let store = Arc::clone(&store);
                readers.push(tokio::spawn(async move {
                    let mut cache = store.write().await;
                    cache.get("students")
                }));
            }

            for writer in writers {
                writer.await.expect("writer panicked");
            }

            let mut torn = Vec::new();
            for reader in readers {
                if let Some(seen) = reader.await.expect("reader panicked") {
                    if !valid.contains(&seen) {
                        torn.push(seen);
                    }
                }
            }
            torn
        });

        prop_assert!(torn.is_empty(), "observed values never written: {:?}", torn);
    }
}
