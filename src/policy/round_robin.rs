//! Round-Robin eviction policy.
//!
//! Keys sit in a ring in admission order and a cursor walks the ring. Each
//! eviction takes the key under the cursor and advances the cursor to the
//! next remaining key, wrapping to the front after the last one. Reads are
//! ignored; the cursor position alone decides the victim.
//!
//! ```text
//!   ring: KeyList<K>                 cursor
//!                                      │
//!   front ──► [B] ◄──► [C] ◄──► [D] ◄──┘── back
//!
//!   evict() → B, cursor → C
//!   evict() → C, cursor → D
//!   evict() → D, cursor wraps → front
//! ```
//!
//! A cursor of `None` means "at the front". New keys are appended at the back,
//! so they are reached after every key already in the ring.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::cache::Cache;
//! use evictkit::policy::round_robin::RoundRobinPolicy;
//!
//! let mut cache = Cache::new(3, RoundRobinPolicy::new()).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);
//! cache.put("d", 4);
//! assert!(!cache.contains(&"a"));
//! assert_eq!(cache.policy().cursor(), Some(&"b"));
//! ```

use std::hash::Hash;

use crate::ds::{KeyList, SlotId};
use crate::error::InvariantError;
use crate::traits::EvictionPolicy;

/// Admission-ordered ring with a rotating eviction cursor.
#[derive(Debug)]
pub struct RoundRobinPolicy<K> {
    ring: KeyList<K>,
    cursor: Option<SlotId>,
}

impl<K> RoundRobinPolicy<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            ring: KeyList::new(),
            cursor: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ring: KeyList::with_capacity(capacity),
            cursor: None,
        }
    }

    /// The key the cursor points at, i.e. the next victim.
    pub fn cursor(&self) -> Option<&K> {
        self.cursor_id().and_then(|id| self.ring.get(id))
    }

    fn cursor_id(&self) -> Option<SlotId> {
        self.cursor.or_else(|| self.ring.front_id())
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if let Some(id) = self.cursor
            && self.ring.get(id).is_none()
        {
            return Err(InvariantError::new("round-robin cursor names a removed key"));
        }
        Ok(())
    }
}

impl<K> Default for RoundRobinPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for RoundRobinPolicy<K>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn on_get(&mut self, _key: &K) {}

    #[inline]
    fn on_put(&mut self, key: &K) {
        self.ring.push_back(key.clone());
    }

    fn evict(&mut self) -> Option<K> {
        let id = self.cursor_id()?;
        let victim = self.ring.get(id)?.clone();
        self.cursor = self.ring.next_id(id);
        self.ring.remove(&victim);
        Some(victim)
    }

    fn remove(&mut self, key: &K) {
        let Some(id) = self.ring.id_of(key) else {
            return;
        };
        if self.cursor == Some(id) {
            self.cursor = self.ring.next_id(id);
        }
        self.ring.remove(key);
    }

    fn len(&self) -> usize {
        self.ring.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.ring.contains(key)
    }

    fn clear(&mut self) {
        self.ring.clear();
        self.cursor = None;
    }

    fn name(&self) -> &'static str {
        "round-robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_through_initial_keys_then_newcomers() {
        let mut rr = RoundRobinPolicy::new();
        for key in ["a", "b", "c"] {
            rr.on_put(&key);
        }

        let mut victims = Vec::new();
        for newcomer in ["d", "e", "f", "g", "h"] {
            victims.push(rr.evict().unwrap());
            rr.on_put(&newcomer);
        }
        assert_eq!(victims, vec!["a", "b", "c", "d", "e"]);
        rr.check_invariants().unwrap();
    }

    #[test]
    fn cursor_wraps_to_front() {
        let mut rr = RoundRobinPolicy::with_capacity(3);
        rr.on_put(&1);
        rr.on_put(&2);
        assert_eq!(rr.evict(), Some(1));
        assert_eq!(rr.cursor(), Some(&2));
        assert_eq!(rr.evict(), Some(2));
        assert_eq!(rr.cursor(), None);

        rr.on_put(&3);
        assert_eq!(rr.cursor(), Some(&3));
    }

    #[test]
    fn wrap_after_last_key_restarts_at_front() {
        let mut rr = RoundRobinPolicy::new();
        rr.on_put(&1);
        rr.on_put(&2);
        rr.on_put(&3);
        rr.remove(&1);
        rr.remove(&2);
        // cursor sits on 3, the back; after evicting it the ring restarts
        assert_eq!(rr.evict(), Some(3));
        rr.on_put(&4);
        rr.on_put(&5);
        assert_eq!(rr.evict(), Some(4));
    }

    #[test]
    fn removing_cursor_key_advances_cursor() {
        let mut rr = RoundRobinPolicy::new();
        rr.on_put(&"a");
        rr.on_put(&"b");
        rr.on_put(&"c");
        assert_eq!(rr.evict(), Some("a"));
        assert_eq!(rr.cursor(), Some(&"b"));

        rr.remove(&"b");
        assert_eq!(rr.cursor(), Some(&"c"));
        rr.check_invariants().unwrap();
        assert_eq!(rr.evict(), Some("c"));
    }

    #[test]
    fn reads_do_not_move_cursor() {
        let mut rr = RoundRobinPolicy::new();
        rr.on_put(&1);
        rr.on_put(&2);
        rr.on_get(&1);
        assert_eq!(rr.evict(), Some(1));
    }

    #[test]
    fn empty_ring_has_no_victim() {
        let mut rr: RoundRobinPolicy<u8> = RoundRobinPolicy::new();
        assert_eq!(rr.evict(), None);
        rr.on_put(&1);
        rr.clear();
        assert_eq!(rr.cursor(), None);
        assert_eq!(rr.evict(), None);
    }
}
