//! FIFO (First In, First Out) eviction policy.
//!
//! Victims leave in arrival order; reads are ignored entirely.
//!
//! ```text
//!   queue: KeyList<K>
//!
//!   head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!           oldest             newest
//!           (victim)           (on_put appends here)
//! ```
//!
//! Backed by a linked key set rather than a `VecDeque` so that an explicit
//! [`Cache::remove`](crate::cache::Cache::remove) does not leave a stale slot
//! in the queue.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::cache::Cache;
//! use evictkit::policy::fifo::FifoPolicy;
//!
//! let mut cache = Cache::new(3, FifoPolicy::new()).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);
//! cache.get(&"a");
//! cache.put("d", 4);
//!
//! assert!(!cache.contains(&"a"));
//! ```

use std::hash::Hash;

use crate::ds::KeyList;
use crate::traits::EvictionPolicy;

/// Insertion-ordered queue; evicts the oldest admitted key.
#[derive(Debug)]
pub struct FifoPolicy<K> {
    queue: KeyList<K>,
}

impl<K> FifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            queue: KeyList::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: KeyList::with_capacity(capacity),
        }
    }

    /// The key `evict` would return next.
    pub fn peek_victim(&self) -> Option<&K> {
        self.queue.front()
    }
}

impl<K> Default for FifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for FifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn on_get(&mut self, _key: &K) {}

    #[inline]
    fn on_put(&mut self, key: &K) {
        self.queue.push_back(key.clone());
    }

    #[inline]
    fn evict(&mut self) -> Option<K> {
        self.queue.pop_front()
    }

    #[inline]
    fn remove(&mut self, key: &K) {
        self.queue.remove(key);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.queue.contains(key)
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn name(&self) -> &'static str {
        "fifo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_in_arrival_order() {
        let mut fifo = FifoPolicy::new();
        for key in ["a", "b", "c"] {
            fifo.on_put(&key);
        }
        assert_eq!(fifo.evict(), Some("a"));
        assert_eq!(fifo.evict(), Some("b"));
        assert_eq!(fifo.evict(), Some("c"));
        assert_eq!(fifo.evict(), None);
    }

    #[test]
    fn reads_do_not_reorder() {
        let mut fifo = FifoPolicy::with_capacity(3);
        fifo.on_put(&1);
        fifo.on_put(&2);
        for _ in 0..10 {
            fifo.on_get(&1);
        }
        assert_eq!(fifo.peek_victim(), Some(&1));
        assert_eq!(fifo.evict(), Some(1));
    }

    #[test]
    fn removed_key_is_skipped() {
        let mut fifo = FifoPolicy::new();
        fifo.on_put(&1);
        fifo.on_put(&2);
        fifo.remove(&1);
        assert_eq!(fifo.len(), 1);
        assert_eq!(fifo.evict(), Some(2));
    }

    #[test]
    fn duplicate_put_keeps_original_position() {
        let mut fifo = FifoPolicy::new();
        fifo.on_put(&1);
        fifo.on_put(&2);
        fifo.on_put(&1);
        assert_eq!(fifo.len(), 2);
        assert_eq!(fifo.evict(), Some(1));
    }
}
