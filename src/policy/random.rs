//! Random eviction policy.
//!
//! Victims are drawn uniformly from the tracked keys. Reads are ignored, so
//! this is the zero-knowledge baseline other policies are measured against.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, usize>        keys: Vec<K>
//!   ┌──────────┬───────┐              ┌─────┬─────┬─────┬─────┐
//!   │  "p1"    │   0   │─────────────►│ p1  │ p2  │ p3  │ p4  │
//!   │  "p2"    │   1   │              └─────┴─────┴─────┴─────┘
//!   │  ...     │  ...  │
//!   └──────────┴───────┘
//!
//!   evict(): i = rng in [0, len)  ─► swap_remove(i) ─► fix index of moved key
//! ```
//!
//! Swap-remove keeps the pool dense, so both `evict` and `remove` are O(1).
//!
//! ## Determinism
//!
//! [`RandomPolicy::new`] seeds from the thread RNG. Use
//! [`RandomPolicy::with_seed`] for reproducible eviction sequences.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::cache::Cache;
//! use evictkit::policy::random::RandomPolicy;
//!
//! let mut cache = Cache::new(10, RandomPolicy::with_seed(7)).unwrap();
//! for i in 0..100 {
//!     cache.put(i, i * 10);
//! }
//! assert_eq!(cache.len(), 10);
//! cache.check_invariants().unwrap();
//! ```

use std::fmt;
use std::hash::Hash;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

use crate::error::InvariantError;
use crate::traits::EvictionPolicy;

/// Dense key pool with uniform random victim selection.
pub struct RandomPolicy<K> {
    index: FxHashMap<K, usize>,
    keys: Vec<K>,
    rng: SmallRng,
}

impl<K> RandomPolicy<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a policy seeded from the thread-local RNG.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_rng(&mut rand::rng()))
    }

    /// Creates a policy with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            index: FxHashMap::default(),
            keys: Vec::new(),
            rng,
        }
    }

    /// Removes the key at `idx` by swapping the last key into its place.
    fn swap_remove_at(&mut self, idx: usize) -> K {
        let victim = self.keys.swap_remove(idx);
        if let Some(moved) = self.keys.get(idx)
            && let Some(slot) = self.index.get_mut(moved)
        {
            *slot = idx;
        }
        self.index.remove(&victim);
        victim
    }

    /// Checks that the pool and the index describe the same positions.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.keys.len() {
            return Err(InvariantError::new(format!(
                "random pool holds {} keys, index holds {}",
                self.keys.len(),
                self.index.len()
            )));
        }
        for (pos, key) in self.keys.iter().enumerate() {
            if self.index.get(key) != Some(&pos) {
                return Err(InvariantError::new(format!(
                    "random index disagrees with pool at position {pos}"
                )));
            }
        }
        Ok(())
    }
}

impl<K> Default for RandomPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for RandomPolicy<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomPolicy")
            .field("len", &self.keys.len())
            .finish_non_exhaustive()
    }
}

impl<K> EvictionPolicy<K> for RandomPolicy<K>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn on_get(&mut self, _key: &K) {}

    fn on_put(&mut self, key: &K) {
        if self.index.contains_key(key) {
            return;
        }
        self.index.insert(key.clone(), self.keys.len());
        self.keys.push(key.clone());
    }

    fn evict(&mut self) -> Option<K> {
        if self.keys.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..self.keys.len());
        Some(self.swap_remove_at(idx))
    }

    fn remove(&mut self, key: &K) {
        if let Some(&idx) = self.index.get(key) {
            self.swap_remove_at(idx);
        }
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn clear(&mut self) {
        self.index.clear();
        self.keys.clear();
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
