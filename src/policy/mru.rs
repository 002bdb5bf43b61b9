//! Most Recently Used (MRU) eviction policy.
//!
//! The mirror image of LRU: the key touched last is the one evicted next.
//! Useful for cyclic scans larger than the cache, where the item just read is
//! the one least likely to be needed again soon.
//!
//! ## Architecture
//!
//! ```text
//!   stack: KeyList<K>
//!
//!   bottom ──► [A] ◄──► [B] ◄──► [C] ◄── top
//!              oldest touch        newest touch
//!                                  (victim)
//! ```
//!
//! | Hook     | Effect                  | Time |
//! |----------|-------------------------|------|
//! | `on_get` | move key to top         | O(1) |
//! | `on_put` | push key on top         | O(1) |
//! | `evict`  | pop top                 | O(1) |
//! | `remove` | unlink key              | O(1) |
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::cache::Cache;
//! use evictkit::policy::mru::MruPolicy;
//!
//! let mut cache = Cache::new(3, MruPolicy::new()).unwrap();
//! cache.put(1, "one");
//! cache.put(2, "two");
//! cache.put(3, "three");
//! cache.get(&1);
//! cache.put(4, "four");
//!
//! assert!(!cache.contains(&1));
//! assert!(cache.contains(&3));
//! ```

use std::hash::Hash;

use crate::ds::KeyList;
use crate::traits::EvictionPolicy;

/// Stack reordered on every touch; evicts the most recently touched key.
#[derive(Debug)]
pub struct MruPolicy<K> {
    stack: KeyList<K>,
}

impl<K> MruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            stack: KeyList::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: KeyList::with_capacity(capacity),
        }
    }

    /// The key `evict` would return next.
    pub fn peek_victim(&self) -> Option<&K> {
        self.stack.back()
    }
}

impl<K> Default for MruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for MruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn on_get(&mut self, key: &K) {
        self.stack.move_to_back(key);
    }

    #[inline]
    fn on_put(&mut self, key: &K) {
        if !self.stack.push_back(key.clone()) {
            self.stack.move_to_back(key);
        }
    }

    #[inline]
    fn evict(&mut self) -> Option<K> {
        self.stack.pop_back()
    }

    #[inline]
    fn remove(&mut self, key: &K) {
        self.stack.remove(key);
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.stack.contains(key)
    }

    fn clear(&mut self) {
        self.stack.clear();
    }

    fn name(&self) -> &'static str {
        "mru"
    }
}
