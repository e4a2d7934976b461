//! Recency Order Module
//!
//! Least-recently-used ordering used to pick capacity eviction victims.

use std::collections::VecDeque;

// == Recency Order ==
/// Keys ordered by last use: front is most recent, back is the next victim.
#[derive(Debug)]
pub struct RecencyOrder<K> {
    order: VecDeque<K>,
}

impl<K> Default for RecencyOrder<K> {
    fn default() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl<K: Eq + Clone> RecencyOrder<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `key` to the most-recent position, adding it if untracked.
    pub fn mark_used(&mut self, key: &K) {
        self.forget(key);
        self.order.push_front(key.clone());
    }

    /// Stops tracking `key`. Untracked keys are ignored.
    pub fn forget(&mut self, key: &K) {
        self.order.retain(|k| k != key);
    }

    /// Removes and returns the least recently used key.
    pub fn pop_least_recent(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
