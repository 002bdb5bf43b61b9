//! Least Frequently Used (LFU) eviction policy.
//!
//! Evicts a key with the lowest access frequency; among equals, the one that
//! entered that frequency bucket first.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          LfuPolicy<K> Layout                            │
//! │                                                                         │
//! │   entries: FxHashMap<K, (freq, SlotId)>                                 │
//! │   ┌────────┬─────────────┐                                              │
//! │   │  "a"   │ (3, id_0)   │──────────────────────────────┐               │
//! │   │  "b"   │ (1, id_0)   │────────┐                     │               │
//! │   │  "c"   │ (1, id_1)   │────┐   │                     │               │
//! │   └────────┴─────────────┘    │   │                     │               │
//! │                               ▼   ▼                     ▼               │
//! │   buckets: FxHashMap<u64, IntrusiveList<K>>                             │
//! │     freq 1: front ─► [b] ◄──► [c]     ◄── min_frequency                 │
//! │     freq 3: front ─► [a]                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Hook Flow
//!
//! ```text
//!   on_put(k)  bucket 1 push_back, min_frequency = 1
//!   on_get(k)  unlink from bucket f, push_back into bucket f+1;
//!              if bucket f emptied and f == min_frequency → min_frequency = f+1
//!   evict()    pop_front of bucket[min_frequency]
//!   remove(k)  unlink; min_frequency may go stale
//! ```
//!
//! `min_frequency` is exact after `on_put`/`on_get`/`evict`. After `remove`
//! empties the minimum bucket it may name a bucket that no longer exists; the
//! next `evict` notices and rescans the (few) bucket keys.
//!
//! ## Operations
//!
//! | Hook     | Time                                         |
//! |----------|----------------------------------------------|
//! | `on_get` | O(1)                                         |
//! | `on_put` | O(1)                                         |
//! | `evict`  | O(1), O(#buckets) once after a stale min     |
//! | `remove` | O(1)                                         |
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::cache::Cache;
//! use evictkit::policy::lfu::LfuPolicy;
//!
//! let mut cache = Cache::new(3, LfuPolicy::new()).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);
//! cache.get(&"a");
//! cache.get(&"a");
//! cache.put("d", 4);
//!
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.policy().frequency(&"a"), Some(3));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{IntrusiveList, SlotId};
use crate::error::InvariantError;
use crate::traits::EvictionPolicy;

/// Frequency-bucketed key set; evicts from the lowest non-empty bucket.
#[derive(Debug)]
pub struct LfuPolicy<K> {
    entries: FxHashMap<K, (u64, SlotId)>,
    buckets: FxHashMap<u64, IntrusiveList<K>>,
    min_frequency: u64,
}

impl<K> LfuPolicy<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            buckets: FxHashMap::default(),
            min_frequency: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            buckets: FxHashMap::default(),
            min_frequency: 0,
        }
    }

    /// Current frequency of `key`: 1 after admission, +1 per read.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.entries.get(key).map(|&(freq, _)| freq)
    }

    /// Lowest frequency among tracked keys.
    pub fn min_frequency(&self) -> Option<u64> {
        if self.buckets.contains_key(&self.min_frequency) {
            Some(self.min_frequency)
        } else {
            self.buckets.keys().min().copied()
        }
    }

    /// The key `evict` would return next.
    pub fn peek_victim(&self) -> Option<&K> {
        let min = self.min_frequency()?;
        self.buckets.get(&min).and_then(IntrusiveList::front)
    }

    /// Unlinks `id` from bucket `freq`, dropping the bucket if it empties.
    /// Returns the key and whether the bucket was dropped.
    fn unlink(&mut self, freq: u64, id: SlotId) -> Option<(K, bool)> {
        let bucket = self.buckets.get_mut(&freq)?;
        let key = bucket.remove(id)?;
        let emptied = bucket.is_empty();
        if emptied {
            self.buckets.remove(&freq);
        }
        Some((key, emptied))
    }

    fn refresh_min_frequency(&mut self) {
        if !self.buckets.contains_key(&self.min_frequency)
            && let Some(&min) = self.buckets.keys().min()
        {
            self.min_frequency = min;
        }
    }

    /// Checks that the key index, the buckets and `min_frequency` agree.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let bucketed: usize = self.buckets.values().map(IntrusiveList::len).sum();
        if bucketed != self.entries.len() {
            return Err(InvariantError::new(format!(
                "lfu buckets hold {bucketed} keys, index holds {}",
                self.entries.len()
            )));
        }
        if let Some((freq, _)) = self.buckets.iter().find(|(_, b)| b.is_empty()) {
            return Err(InvariantError::new(format!("lfu bucket {freq} is empty")));
        }
        for (key, &(freq, id)) in &self.entries {
            let in_bucket = self.buckets.get(&freq).and_then(|b| b.get(id));
            if in_bucket != Some(key) {
                return Err(InvariantError::new(format!(
                    "lfu key indexed at frequency {freq} is missing from that bucket"
                )));
            }
        }
        if let Some(&lowest) = self.buckets.keys().min()
            && self.min_frequency > lowest
        {
            return Err(InvariantError::new(format!(
                "lfu min_frequency {} above lowest bucket {lowest}",
                self.min_frequency
            )));
        }
        Ok(())
    }
}

impl<K> Default for LfuPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LfuPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn on_get(&mut self, key: &K) {
        let Some(&(freq, id)) = self.entries.get(key) else {
            return;
        };
        let Some((owned, emptied)) = self.unlink(freq, id) else {
            return;
        };
        if emptied && freq == self.min_frequency {
            self.min_frequency = freq + 1;
        }

        let next = freq + 1;
        let new_id = self.buckets.entry(next).or_default().push_back(owned);
        if let Some(slot) = self.entries.get_mut(key) {
            *slot = (next, new_id);
        }
    }

    fn on_put(&mut self, key: &K) {
        if self.entries.contains_key(key) {
            return;
        }
        let id = self.buckets.entry(1).or_default().push_back(key.clone());
        self.entries.insert(key.clone(), (1, id));
        self.min_frequency = 1;
    }

    fn evict(&mut self) -> Option<K> {
        if self.entries.is_empty() {
            return None;
        }
        self.refresh_min_frequency();

        let min = self.min_frequency;
        let bucket = self.buckets.get_mut(&min)?;
        let victim = bucket.pop_front()?;
        if bucket.is_empty() {
            self.buckets.remove(&min);
        }
        self.entries.remove(&victim);
        Some(victim)
    }

    fn remove(&mut self, key: &K) {
        if let Some((freq, id)) = self.entries.remove(key) {
            self.unlink(freq, id);
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.buckets.clear();
        self.min_frequency = 0;
    }

    fn name(&self) -> &'static str {
        "lfu"
    }
}
