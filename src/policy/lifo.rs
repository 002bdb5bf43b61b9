//! LIFO (Last In, First Out) eviction policy.
//!
//! The most recently admitted key is evicted first; reads are ignored.
//! Long-lived early arrivals therefore stay resident indefinitely, which suits
//! workloads where the first-loaded items are the stable working set.
//!
//! ```text
//!   stack: KeyList<K>
//!
//!   bottom ──► [A] ◄──► [B] ◄──► [C] ◄── top
//!              first               last admitted
//!              (kept)              (victim)
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::cache::Cache;
//! use evictkit::policy::lifo::LifoPolicy;
//!
//! let mut cache = Cache::new(2, LifoPolicy::new()).unwrap();
//! cache.put(1, "one");
//! cache.put(2, "two");
//! cache.put(3, "three");
//!
//! assert!(cache.contains(&1));
//! assert!(!cache.contains(&2));
//! ```

use std::hash::Hash;

use crate::ds::KeyList;
use crate::traits::EvictionPolicy;

/// Insertion-ordered stack; evicts the newest admitted key.
#[derive(Debug)]
pub struct LifoPolicy<K> {
    stack: KeyList<K>,
}

impl<K> LifoPolicy<K>
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

impl<K> Default for LifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn on_get(&mut self, _key: &K) {}

    #[inline]
    fn on_put(&mut self, key: &K) {
        self.stack.push_back(key.clone());
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
        "lifo"
    }
}
