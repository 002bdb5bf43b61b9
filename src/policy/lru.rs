//! Least Recently Used (LRU) eviction policy.
//!
//! ## Architecture
//!
//! ```text
//!   order: KeyList<K>
//!
//!   front ──► [A] ◄──► [B] ◄──► [C] ◄── back
//!             LRU                MRU
//!           (victim)         (newest / just read)
//! ```
//!
//! ## Hook Flow
//!
//! ```text
//!   on_put(D)   push_back:   [A][B][C][D]
//!   on_get(A)   move_to_back: [B][C][D][A]
//!   evict()     pop_front:   B      → [C][D][A]
//! ```
//!
//! Keys that were never read keep their insertion order, so among them the
//! oldest is evicted first.
//!
//! ## Operations
//!
//! | Hook       | Time |
//! |------------|------|
//! | `on_get`   | O(1) |
//! | `on_put`   | O(1) |
//! | `evict`    | O(1) |
//! | `remove`   | O(1) |
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::cache::Cache;
//! use evictkit::policy::lru::LruPolicy;
//!
//! let mut cache = Cache::new(3, LruPolicy::new()).unwrap();
//! for key in ["a", "b", "c"] {
//!     cache.put(key, key.len());
//! }
//! cache.get(&"a");
//! cache.put("d", 1);
//!
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.policy().peek_victim(), Some(&"c"));
//! ```

use std::hash::Hash;

use crate::ds::KeyList;
use crate::traits::EvictionPolicy;

/// Recency-ordered key list; evicts the key read or written longest ago.
#[derive(Debug)]
pub struct LruPolicy<K> {
    order: KeyList<K>,
}

impl<K> LruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            order: KeyList::new(),
        }
    }

    /// Pre-sizes internal storage for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: KeyList::with_capacity(capacity),
        }
    }

    /// The key `evict` would return next.
    pub fn peek_victim(&self) -> Option<&K> {
        self.order.front()
    }

    /// Keys from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }
}

impl<K> Default for LruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn on_get(&mut self, key: &K) {
        self.order.move_to_back(key);
    }

    #[inline]
    fn on_put(&mut self, key: &K) {
        if !self.order.push_back(key.clone()) {
            self.order.move_to_back(key);
        }
    }

    #[inline]
    fn evict(&mut self) -> Option<K> {
        self.order.pop_front()
    }

    #[inline]
    fn remove(&mut self, key: &K) {
        self.order.remove(key);
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.order.contains(key)
    }

    fn clear(&mut self) {
        self.order.clear();
    }

    fn name(&self) -> &'static str {
        "lru"
    }
}
