//! Bounded key-value cache with an injected eviction policy.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Cache<K, V, P>                                │
//! │                                                                         │
//! │   store: FxHashMap<K, CacheEntry<V>>          policy: P                 │
//! │   ┌────────┬──────────────────────────┐       ┌───────────────────────┐ │
//! │   │  Key   │ value, inserted_at,      │       │ keys only, in the     │ │
//! │   │        │ updated_at, last_access, │       │ order/frequency the   │ │
//! │   │        │ access_count             │       │ strategy needs        │ │
//! │   └────────┴──────────────────────────┘       └───────────────────────┘ │
//! │                                                                         │
//! │   invariant: keys(store) == keys(policy), len <= capacity               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operation Flow
//!
//! ```text
//!   get(k)    miss ─► None (no hooks)
//!             hit  ─► entry.touch() ─► policy.on_get(k) ─► Some(&v)
//!
//!   put(k,v)  resident ─► overwrite value, refresh updated_at (no hooks)
//!             new      ─► admit: [full? policy.evict() ─► store.remove(victim)]
//!                                store.insert ─► policy.on_put(k)
//! ```
//!
//! `admit` is the only place that pairs storage mutation with policy hooks
//! for new keys.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::cache::Cache;
//! use evictkit::policy::lru::LruPolicy;
//!
//! let mut cache = Cache::new(3, LruPolicy::new()).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);
//! cache.get(&"a");
//! cache.put("d", 4);
//!
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.get(&"a"), Some(&1));
//! assert_eq!(cache.size(), 3);
//! ```
//!
//! ## Thread Safety
//!
//! `Cache` requires `&mut self` for every mutating call and carries no
//! internal lock. Share it through [`ConcurrentCache`](crate::sync::ConcurrentCache).

use std::fmt;
use std::hash::Hash;
use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::error::{ConfigError, InvariantError};
use crate::metrics::{CacheMetrics, CacheMetricsSnapshot, CoreMetricsRecorder};
use crate::traits::{DynPolicy, EvictionPolicy, ReadOnlyCache};

/// Stored value plus access bookkeeping. Never handed out; see [`EntryMetadata`].
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
    updated_at: Instant,
    last_accessed_at: Instant,
    access_count: u64,
}

impl<V> CacheEntry<V> {
    fn new(value: V) -> Self {
        let now = Instant::now();
        Self {
            value,
            inserted_at: now,
            updated_at: now,
            last_accessed_at: now,
            access_count: 1,
        }
    }

    /// Records a read.
    fn touch(&mut self) {
        self.last_accessed_at = Instant::now();
        self.access_count = self.access_count.saturating_add(1);
    }

    /// Replaces the value. Access bookkeeping is left alone.
    fn overwrite(&mut self, value: V) -> V {
        self.updated_at = Instant::now();
        std::mem::replace(&mut self.value, value)
    }

    fn metadata(&self) -> EntryMetadata {
        EntryMetadata {
            inserted_at: self.inserted_at,
            updated_at: self.updated_at,
            last_accessed_at: self.last_accessed_at,
            access_count: self.access_count,
        }
    }
}

/// Copy of an entry's bookkeeping, returned by [`Cache::metadata`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    /// When the key was first admitted.
    pub inserted_at: Instant,
    /// When the value was last written (admission or overwrite).
    pub updated_at: Instant,
    /// When the key was last read through [`Cache::get`] (admission counts).
    pub last_accessed_at: Instant,
    /// 1 on admission, +1 per [`Cache::get`] hit.
    pub access_count: u64,
}

/// Bounded cache that delegates victim selection to an [`EvictionPolicy`].
///
/// The policy type defaults to [`DynPolicy`], a boxed trait object, so caches
/// built at runtime by [`CacheBuilder`](crate::builder::CacheBuilder) share one
/// type regardless of policy. A concrete `P` gives static dispatch and lets
/// callers inspect policy state through [`policy`](Self::policy).
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Clone + Eq + Hash` (the policy keeps its own copy)
/// - `V`: Value type
/// - `P`: Eviction policy
pub struct Cache<K, V, P = DynPolicy<K>> {
    store: FxHashMap<K, CacheEntry<V>>,
    policy: P,
    capacity: usize,
    metrics: CacheMetrics,
}

impl<K, V> Cache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a cache whose policy is boxed behind [`DynPolicy`].
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::cache::Cache;
    /// use evictkit::policy::mru::MruPolicy;
    ///
    /// let mut caches: Vec<Cache<u32, u32>> = vec![
    ///     Cache::boxed(2, MruPolicy::new()).unwrap(),
    /// ];
    /// caches[0].put(1, 10);
    /// assert_eq!(caches[0].len(), 1);
    /// ```
    pub fn boxed<Q>(capacity: usize, policy: Q) -> Result<Self, ConfigError>
    where
        Q: EvictionPolicy<K> + Send + 'static,
    {
        Cache::new(capacity, Box::new(policy) as DynPolicy<K>)
    }
}

impl<K, V, P> Cache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// The policy is resized to `capacity` through
    /// [`EvictionPolicy::set_capacity`].
    ///
    /// # Errors
    ///
    /// - `capacity` is 0
    /// - `policy` already tracks keys (its bookkeeping would have no
    ///   matching entries)
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::cache::Cache;
    /// use evictkit::policy::fifo::FifoPolicy;
    ///
    /// assert!(Cache::<u32, u32, _>::new(0, FifoPolicy::new()).is_err());
    /// let cache = Cache::<u32, u32, _>::new(8, FifoPolicy::new()).unwrap();
    /// assert_eq!(cache.capacity(), 8);
    /// ```
    pub fn new(capacity: usize, mut policy: P) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::zero_capacity());
        }
        if !policy.is_empty() {
            return Err(ConfigError::new(format!(
                "{} policy must start empty, but tracks {} keys",
                policy.name(),
                policy.len()
            )));
        }
        policy.set_capacity(capacity);

        debug!(capacity, policy = policy.name(), "created cache");
        Ok(Self {
            store: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            policy,
            capacity,
            metrics: CacheMetrics::new(),
        })
    }

    /// Looks up `key`, recording the access with the entry and the policy.
    ///
    /// A miss has no side effects besides the miss counter.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.store.get_mut(key) {
            Some(entry) => {
                entry.touch();
                self.policy.on_get(key);
                self.metrics.record_get_hit();
                Some(&entry.value)
            },
            None => {
                self.metrics.record_get_miss();
                None
            },
        }
    }

    /// Reads `key` without touching entry metadata or policy state.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.store.get(key).map(|entry| &entry.value)
    }

    /// Inserts or overwrites `key`.
    ///
    /// - Resident key: the value is replaced and returned; no policy hook runs
    ///   and the access count is unchanged.
    /// - New key: if the cache is full the policy picks a victim first, then
    ///   the key is stored and handed to `on_put`. Returns `None`.
    ///
    /// # Panics
    ///
    /// If the policy disagrees with storage while the cache is full (no
    /// victim, or a victim that is not resident). That is a bug in the policy.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(entry) = self.store.get_mut(&key) {
            self.metrics.record_insert_update();
            return Some(entry.overwrite(value));
        }

        self.admit(key, value);
        None
    }

    /// Evict-if-full, store, notify: the single transaction that admits a
    /// new key.
    fn admit(&mut self, key: K, value: V) {
        if self.store.len() >= self.capacity {
            self.evict_one();
        }

        self.store.insert(key.clone(), CacheEntry::new(value));
        self.policy.on_put(&key);
        self.metrics.record_insert_new();

        debug_assert!(self.store.len() <= self.capacity);
        debug_assert_eq!(self.store.len(), self.policy.len());
    }

    fn evict_one(&mut self) {
        let Some(victim) = self.policy.evict() else {
            panic!(
                "{} policy returned no victim while the cache is full ({} of {})",
                self.policy.name(),
                self.store.len(),
                self.capacity
            );
        };
        if self.store.remove(&victim).is_none() {
            panic!(
                "{} policy chose a victim that is not resident",
                self.policy.name()
            );
        }

        self.metrics.record_evicted_entry();
        trace!(
            policy = self.policy.name(),
            len = self.store.len(),
            "evicted entry"
        );
    }

    /// Removes `key` from storage and policy, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let entry = self.store.remove(key)?;
        self.policy.remove(key);
        self.metrics.record_remove();
        Some(entry.value)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.store.clear();
        self.policy.clear();
        self.metrics.record_clear();
        debug!(policy = self.policy.name(), "cleared cache");
    }

    pub fn contains(&self, key: &K) -> bool {
        self.store.contains_key(key)
    }

    /// Current number of resident keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Alias for [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copy of the bookkeeping for `key`, if resident.
    pub fn metadata(&self, key: &K) -> Option<EntryMetadata> {
        self.store.get(key).map(CacheEntry::metadata)
    }

    /// Read-only access to the policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn metrics(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.store.len(), self.capacity)
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Verifies that storage and policy track the same key set and that the
    /// capacity bound holds.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.store.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} entries resident, capacity is {}",
                self.store.len(),
                self.capacity
            )));
        }
        if self.store.len() != self.policy.len() {
            return Err(InvariantError::new(format!(
                "{} policy tracks {} keys, storage holds {}",
                self.policy.name(),
                self.policy.len(),
                self.store.len()
            )));
        }
        if self.store.keys().any(|k| !self.policy.contains(k)) {
            return Err(InvariantError::new(format!(
                "resident key untracked by {} policy",
                self.policy.name()
            )));
        }
        Ok(())
    }
}

impl<K, V, P> ReadOnlyCache<K> for Cache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
{
    fn contains(&self, key: &K) -> bool {
        Cache::contains(self, key)
    }

    fn len(&self) -> usize {
        Cache::len(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V, P> fmt::Debug for Cache<K, V, P>
where
    P: EvictionPolicy<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("policy", &self.policy.name())
            .field("capacity", &self.capacity)
            .field("len", &self.store.len())
            .finish_non_exhaustive()
    }
}
