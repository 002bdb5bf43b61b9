//! Ordered set of keys with O(1) membership, removal and repositioning.
//!
//! Pairs an [`IntrusiveList`] of keys with an index from key to node handle,
//! which is the bookkeeping shape shared by most policies: FIFO/LIFO use it as
//! a queue/stack that still supports removal by key, LRU/MRU as a recency
//! list, Round-Robin as its rotation order, 2Q as `A1in` and `Am`.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, SlotId>        list: IntrusiveList<K>
//!   ┌─────────┬─────────┐              front ─► [A] ◄──► [B] ◄──► [C] ◄── back
//!   │  key A  │  id_0   │
//!   │  key B  │  id_1   │
//!   │  key C  │  id_2   │
//!   └─────────┴─────────┘
//! ```
//!
//! ## Performance
//! - `push_back` / `pop_*` / `remove` / `move_to_back` / `contains`: O(1) average
//! - `iter`: O(n)
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::{IntrusiveList, Iter};
use crate::ds::slot_arena::SlotId;

/// Linked hash set of keys.
#[derive(Debug)]
pub struct KeyList<K> {
    list: IntrusiveList<K>,
    index: FxHashMap<K, SlotId>,
}

impl<K> KeyList<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            list: IntrusiveList::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: IntrusiveList::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn front(&self) -> Option<&K> {
        self.list.front()
    }

    pub fn back(&self) -> Option<&K> {
        self.list.back()
    }

    /// Appends `key` at the back. Returns `false` (and changes nothing) if the
    /// key is already present.
    pub fn push_back(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let id = self.list.push_back(key.clone());
        self.index.insert(key, id);
        true
    }

    pub fn pop_front(&mut self) -> Option<K> {
        let key = self.list.pop_front()?;
        self.index.remove(&key);
        Some(key)
    }

    pub fn pop_back(&mut self) -> Option<K> {
        let key = self.list.pop_back()?;
        self.index.remove(&key);
        Some(key)
    }

    /// Removes `key`; returns `true` if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(id) => {
                self.list.remove(id);
                true
            },
            None => false,
        }
    }

    pub fn move_to_back(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(&id) => self.list.move_to_back(id),
            None => false,
        }
    }

    /// Handle of the node holding `key`; used by cursor-based policies.
    pub fn id_of(&self, key: &K) -> Option<SlotId> {
        self.index.get(key).copied()
    }

    pub fn front_id(&self) -> Option<SlotId> {
        self.list.front_id()
    }

    pub fn next_id(&self, id: SlotId) -> Option<SlotId> {
        self.list.next_id(id)
    }

    pub fn get(&self, id: SlotId) -> Option<&K> {
        self.list.get(id)
    }

    /// Iterates keys from front to back.
    pub fn iter(&self) -> Iter<'_, K> {
        self.list.iter()
    }

    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.list.debug_validate_invariants();
        assert_eq!(self.list.len(), self.index.len());
        for (key, &id) in &self.index {
            assert!(self.list.get(id) == Some(key), "index points at wrong node");
        }
    }
}

impl<K> Default for KeyList<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(keys: &KeyList<&'static str>) -> Vec<&'static str> {
        keys.iter().copied().collect()
    }

    #[test]
    fn duplicate_push_is_rejected() {
        let mut keys = KeyList::new();
        assert!(keys.push_back("a"));
        assert!(!keys.push_back("a"));
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn queue_and_stack_ends() {
        let mut keys = KeyList::with_capacity(4);
        keys.push_back("a");
        keys.push_back("b");
        keys.push_back("c");
        assert_eq!(keys.front(), Some(&"a"));
        assert_eq!(keys.back(), Some(&"c"));

        assert_eq!(keys.pop_front(), Some("a"));
        assert_eq!(keys.pop_back(), Some("c"));
        assert!(!keys.contains(&"a"));
        assert!(!keys.contains(&"c"));
        assert_eq!(order(&keys), vec!["b"]);
        keys.debug_validate_invariants();
    }

    #[test]
    fn remove_by_key() {
        let mut keys = KeyList::new();
        keys.push_back("a");
        keys.push_back("b");
        keys.push_back("c");

        assert!(keys.remove(&"b"));
        assert!(!keys.remove(&"b"));
        assert_eq!(order(&keys), vec!["a", "c"]);
        keys.debug_validate_invariants();
    }

    #[test]
    fn move_to_back_reorders() {
        let mut keys = KeyList::new();
        keys.push_back("a");
        keys.push_back("b");
        keys.push_back("c");

        assert!(keys.move_to_back(&"a"));
        assert_eq!(order(&keys), vec!["b", "c", "a"]);
        assert!(keys.move_to_back(&"b"));
        assert_eq!(order(&keys), vec!["c", "a", "b"]);
        assert!(!keys.move_to_back(&"zzz"));
        keys.debug_validate_invariants();
    }

    #[test]
    fn cursor_walk_via_ids() {
        let mut keys = KeyList::new();
        keys.push_back(1);
        keys.push_back(2);
        keys.push_back(3);

        let mut walked = Vec::new();
        let mut cursor = keys.front_id();
        while let Some(id) = cursor {
            walked.push(*keys.get(id).unwrap());
            cursor = keys.next_id(id);
        }
        assert_eq!(walked, vec![1, 2, 3]);
        assert_eq!(keys.id_of(&2).and_then(|id| keys.get(id)), Some(&2));
    }

    #[test]
    fn clear_resets_state() {
        let mut keys = KeyList::new();
        keys.push_back("a");
        keys.clear();
        assert!(keys.is_empty());
        assert!(!keys.contains(&"a"));
        assert!(keys.push_back("a"));
    }
}
