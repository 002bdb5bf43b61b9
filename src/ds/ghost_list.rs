//! Bounded list of ghost keys.
//!
//! Remembers keys that were recently evicted without holding their values.
//! 2Q uses it as `A1out`: a key that comes back while it is still a ghost has
//! proven it is re-referenced and is admitted straight into the hot queue.
//!
//! ## Behavior
//! - `record(k)`: appends `k` as the newest ghost, dropping the oldest when
//!   full; re-recording an existing ghost refreshes it
//! - `take(k)`: removes `k`, reporting whether it was a ghost
//! - `set_capacity(n)`: rebounds the list, dropping the oldest ghosts that
//!   no longer fit
//! - capacity 0 records nothing
use std::hash::Hash;

use crate::ds::key_list::KeyList;

/// Bounded FIFO of value-less keys.
#[derive(Debug)]
pub struct GhostList<K> {
    keys: KeyList<K>,
    capacity: usize,
}

impl<K> GhostList<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a ghost list holding at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            keys: KeyList::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Records `key` as the newest ghost. Returns the ghost that was pushed
    /// out to make room, if any.
    pub fn record(&mut self, key: K) -> Option<K> {
        if self.capacity == 0 {
            return None;
        }
        if self.keys.move_to_back(&key) {
            return None;
        }

        let dropped = if self.keys.len() >= self.capacity {
            self.keys.pop_front()
        } else {
            None
        };
        self.keys.push_back(key);
        dropped
    }

    /// Removes `key`; returns `true` if it was a ghost.
    pub fn take(&mut self, key: &K) -> bool {
        self.keys.remove(key)
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        while self.keys.len() > capacity {
            self.keys.pop_front();
        }
        self.capacity = capacity;
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.keys.debug_validate_invariants();
        assert!(self.keys.len() <= self.capacity);
    }
}
