//! Two-Queue (2Q) eviction policy.
//!
//! Separates keys seen once from keys that have proven they are re-used. A
//! scan of never-repeated keys only ever cycles through the small probation
//! queue, so it cannot push hot keys out of the protected queue.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          TwoQPolicy<K> Layout                           │
//! │                                                                         │
//! │   A1in (probation, FIFO)        Am (protected, LRU)                     │
//! │   ┌──────────────────────┐      ┌──────────────────────┐                │
//! │   │ front           back │      │ front           back │                │
//! │   │ [k3] ◄──► [k7] ◄──►  │      │ [k1] ◄──► [k4] ◄──►  │                │
//! │   │ oldest       newest  │      │ LRU            MRU   │                │
//! │   └──────────┬───────────┘      └──────────────────────┘                │
//! │              │ evicted while A1in is at its bound                       │
//! │              ▼                                                          │
//! │   A1out (ghosts, bounded FIFO, keys only)                               │
//! │   ┌──────────────────────┐                                              │
//! │   │ [k0] [k2] [k5]       │──── put of a ghost key ───► Am back          │
//! │   └──────────────────────┘                                              │
//! │                                                                         │
//! │   resident = A1in ∪ Am (disjoint);  A1out ∩ resident = ∅                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Transitions
//!
//! | Event                 | From     | To        |
//! |-----------------------|----------|-----------|
//! | `on_put` (new key)    |          | A1in back |
//! | `on_put` (ghost key)  | A1out    | Am back   |
//! | `on_get`              | A1in     | Am back   |
//! | `on_get`              | Am       | Am back   |
//! | `evict` (A1in full)   | A1in front | A1out   |
//! | `evict` (otherwise)   | Am front |           |
//!
//! A read of a probationary key promotes it immediately, so every resident
//! key stays in exactly one of the two resident queues.
//!
//! ## Sizing
//!
//! With capacity `c`, A1in's bound is `max(1, floor(c * a1in_frac))` and
//! A1out holds at most `max(1, floor(c * a1out_frac))` ghosts. Defaults are
//! 0.25 and 0.50. Am has no bound of its own; it gets whatever A1in does not
//! use.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::cache::Cache;
//! use evictkit::policy::two_q::TwoQPolicy;
//!
//! let mut cache = Cache::new(4, TwoQPolicy::new(4)).unwrap();
//! cache.put(0, "hot");
//! cache.get(&0);
//! assert!(cache.policy().in_protected(&0));
//!
//! for page in 1..100 {
//!     cache.put(page, "scanned once");
//! }
//! assert!(cache.contains(&0));
//! ```
//!
//! ## References
//!
//! - Johnson & Shasha, "2Q: A Low Overhead High Performance Buffer Management
//!   Replacement Algorithm", VLDB 1994

use std::hash::Hash;

use tracing::trace;

use crate::ds::{GhostList, KeyList};
use crate::error::{ConfigError, InvariantError};
use crate::traits::EvictionPolicy;

/// Default share of capacity given to the probation queue.
pub const DEFAULT_A1IN_FRAC: f64 = 0.25;
/// Default ghost list size as a share of capacity.
pub const DEFAULT_A1OUT_FRAC: f64 = 0.50;

/// Scan-resistant policy built from a probation FIFO, a protected LRU and a
/// ghost list of recently evicted probationary keys.
#[derive(Debug)]
pub struct TwoQPolicy<K> {
    a1in: KeyList<K>,
    am: KeyList<K>,
    a1out: GhostList<K>,
    a1in_bound: usize,
    a1in_frac: f64,
    a1out_frac: f64,
}

fn scaled_bound(capacity: usize, frac: f64) -> usize {
    ((capacity as f64 * frac).floor() as usize).max(1)
}

fn check_frac(name: &str, frac: f64) -> Result<(), ConfigError> {
    if frac.is_finite() && frac > 0.0 && frac <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::new(format!(
            "{name} must be in (0.0, 1.0], got {frac}"
        )))
    }
}

impl<K> TwoQPolicy<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a 2Q policy sized for `capacity` with the default ratios.
    ///
    /// [`Cache::new`](crate::cache::Cache::new) rescales the bounds to the
    /// cache's own capacity, keeping the ratios.
    pub fn new(capacity: usize) -> Self {
        Self::build(capacity, DEFAULT_A1IN_FRAC, DEFAULT_A1OUT_FRAC)
    }

    /// Creates a 2Q policy with custom queue ratios.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is zero or either fraction is
    /// outside `(0.0, 1.0]`.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::policy::two_q::TwoQPolicy;
    ///
    /// let policy = TwoQPolicy::<u64>::with_ratios(100, 0.1, 0.5).unwrap();
    /// assert_eq!(policy.probation_bound(), 10);
    /// assert_eq!(policy.ghost_bound(), 50);
    ///
    /// assert!(TwoQPolicy::<u64>::with_ratios(100, 0.0, 0.5).is_err());
    /// ```
    pub fn with_ratios(
        capacity: usize,
        a1in_frac: f64,
        a1out_frac: f64,
    ) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::zero_capacity());
        }
        check_frac("a1in_frac", a1in_frac)?;
        check_frac("a1out_frac", a1out_frac)?;
        Ok(Self::build(capacity, a1in_frac, a1out_frac))
    }

    fn build(capacity: usize, a1in_frac: f64, a1out_frac: f64) -> Self {
        Self {
            a1in: KeyList::new(),
            am: KeyList::with_capacity(capacity),
            a1out: GhostList::new(scaled_bound(capacity, a1out_frac)),
            a1in_bound: scaled_bound(capacity, a1in_frac),
            a1in_frac,
            a1out_frac,
        }
    }

    /// Returns `true` if `key` is resident and still on probation.
    pub fn in_probation(&self, key: &K) -> bool {
        self.a1in.contains(key)
    }

    /// Returns `true` if `key` is resident in the protected queue.
    pub fn in_protected(&self, key: &K) -> bool {
        self.am.contains(key)
    }

    /// Returns `true` if `key` was recently evicted from probation and is
    /// remembered as a ghost.
    pub fn is_ghost(&self, key: &K) -> bool {
        self.a1out.contains(key)
    }

    pub fn probation_len(&self) -> usize {
        self.a1in.len()
    }

    pub fn protected_len(&self) -> usize {
        self.am.len()
    }

    pub fn ghost_len(&self) -> usize {
        self.a1out.len()
    }

    /// Probation size at which eviction starts taking from A1in.
    pub fn probation_bound(&self) -> usize {
        self.a1in_bound
    }

    pub fn ghost_bound(&self) -> usize {
        self.a1out.capacity()
    }

    /// Checks queue disjointness and the ghost bound.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.a1in.iter().any(|k| self.am.contains(k)) {
            return Err(InvariantError::new("2Q key is in both A1in and Am"));
        }
        if self
            .a1in
            .iter()
            .chain(self.am.iter())
            .any(|k| self.a1out.contains(k))
        {
            return Err(InvariantError::new("2Q resident key is also a ghost"));
        }
        if self.a1out.len() > self.a1out.capacity() {
            return Err(InvariantError::new(format!(
                "2Q ghost list holds {} keys, bound is {}",
                self.a1out.len(),
                self.a1out.capacity()
            )));
        }
        Ok(())
    }
}

impl<K> EvictionPolicy<K> for TwoQPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn on_get(&mut self, key: &K) {
        if self.a1in.remove(key) {
            self.am.push_back(key.clone());
            trace!(
                probation = self.a1in.len(),
                protected = self.am.len(),
                "2q promoted key on re-reference"
            );
        } else {
            self.am.move_to_back(key);
        }
    }

    fn on_put(&mut self, key: &K) {
        if self.a1in.contains(key) || self.am.contains(key) {
            return;
        }
        if self.a1out.take(key) {
            self.am.push_back(key.clone());
            trace!(
                ghosts = self.a1out.len(),
                protected = self.am.len(),
                "2q ghost hit, admitted to protected queue"
            );
        } else {
            self.a1in.push_back(key.clone());
        }
    }

    fn evict(&mut self) -> Option<K> {
        if self.a1in.len() >= self.a1in_bound
            && let Some(victim) = self.a1in.pop_front()
        {
            self.a1out.record(victim.clone());
            return Some(victim);
        }
        self.am.pop_front().or_else(|| self.a1in.pop_front())
    }

    fn remove(&mut self, key: &K) {
        if !self.a1in.remove(key) {
            self.am.remove(key);
        }
        self.a1out.take(key);
    }

    fn set_capacity(&mut self, capacity: usize) {
        self.a1in_bound = scaled_bound(capacity, self.a1in_frac);
        self.a1out.set_capacity(scaled_bound(capacity, self.a1out_frac));
    }

    fn len(&self) -> usize {
        self.a1in.len() + self.am.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.a1in.contains(key) || self.am.contains(key)
    }

    fn clear(&mut self) {
        self.a1in.clear();
        self.am.clear();
        self.a1out.clear();
    }

    fn name(&self) -> &'static str {
        "2q"
    }
}
