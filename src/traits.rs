//! # Policy and Cache Traits
//!
//! The cache is split into two owners that must stay in lockstep:
//!
//! ```text
//!   ┌──────────────────────────────────────────┐
//!   │              Cache<K, V, P>              │
//!   │                                          │
//!   │   store: FxHashMap<K, CacheEntry<V>>     │   owns values + metadata
//!   │   policy: P: EvictionPolicy<K>           │   owns ordering/frequency
//!   └───────────────┬──────────────────────────┘
//!                   │ hooks
//!                   ▼
//!   ┌──────────────────────────────────────────┐
//!   │          EvictionPolicy<K>               │
//!   │                                          │
//!   │  on_get(&K)        after a hit           │
//!   │  on_put(&K)        after a new key       │
//!   │  evict() → K       pick + forget victim  │
//!   │  remove(&K)        forget explicitly     │
//!   │  set_capacity(n)   sized by the cache    │
//!   │  len / contains / clear / name           │
//!   └──────────────────────────────────────────┘
//! ```
//!
//! ## Hook Contract
//!
//! | Hook       | Called when                              | Policy must                          |
//! |------------|------------------------------------------|--------------------------------------|
//! | `on_get`   | a `get` hit                              | update order/frequency; ignore unknown keys |
//! | `on_put`   | a new key was stored                     | start tracking the key               |
//! | `evict`    | storage is full and a new key arrives    | return a tracked key and stop tracking it |
//! | `remove`   | a key leaves storage outside eviction    | drop every trace of the key          |
//!
//! Overwriting an existing key calls no hook at all. `set_capacity` runs once,
//! from [`Cache::new`](crate::cache::Cache::new), before any key is tracked.
//!
//! `evict` is responsible for its own cleanup: once it returns `Some(k)`,
//! `contains(&k)` is `false`. The cache never calls `remove` for a victim.
//!
//! ## Thread Safety
//!
//! Policies are plain single-threaded state. [`DynPolicy`] adds a `Send`
//! bound so that a boxed policy can move into a
//! [`ConcurrentCache`](crate::sync::ConcurrentCache).

/// Strategy that decides which resident key to discard when the cache is full.
///
/// Implementations own only keys; values and entry metadata stay in the
/// [`Cache`](crate::cache::Cache).
///
/// # Example
///
/// ```
/// use evictkit::policy::fifo::FifoPolicy;
/// use evictkit::traits::EvictionPolicy;
///
/// let mut policy = FifoPolicy::new();
/// policy.on_put(&"a");
/// policy.on_put(&"b");
/// policy.on_get(&"a"); // FIFO ignores reads
///
/// assert_eq!(policy.evict(), Some("a"));
/// assert!(!policy.contains(&"a"));
/// assert_eq!(policy.len(), 1);
/// ```
pub trait EvictionPolicy<K> {
    /// Records a cache hit on `key`. Unknown keys are ignored.
    fn on_get(&mut self, key: &K);

    /// Starts tracking a key that was just stored.
    fn on_put(&mut self, key: &K);

    /// Chooses a victim, stops tracking it and returns it.
    ///
    /// Returns `None` only when no key is tracked.
    fn evict(&mut self) -> Option<K>;

    /// Drops all bookkeeping for `key`. Unknown keys are ignored.
    fn remove(&mut self, key: &K);

    /// Sizes capacity-relative bookkeeping to the owning cache. The cache's
    /// capacity always wins over whatever the policy was constructed with.
    fn set_capacity(&mut self, _capacity: usize) {}

    /// Number of keys currently tracked.
    fn len(&self) -> usize;

    /// Returns `true` if no key is tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is tracked.
    fn contains(&self, key: &K) -> bool;

    /// Forgets every tracked key.
    fn clear(&mut self);

    /// Short policy name, used in logs.
    fn name(&self) -> &'static str;
}

impl<K, P> EvictionPolicy<K> for Box<P>
where
    P: EvictionPolicy<K> + ?Sized,
{
    #[inline]
    fn on_get(&mut self, key: &K) {
        (**self).on_get(key)
    }

    #[inline]
    fn on_put(&mut self, key: &K) {
        (**self).on_put(key)
    }

    #[inline]
    fn evict(&mut self) -> Option<K> {
        (**self).evict()
    }

    #[inline]
    fn remove(&mut self, key: &K) {
        (**self).remove(key)
    }

    fn set_capacity(&mut self, capacity: usize) {
        (**self).set_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        (**self).contains(key)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Boxed policy chosen at runtime. The default policy type of
/// [`Cache`](crate::cache::Cache).
pub type DynPolicy<K> = Box<dyn EvictionPolicy<K> + Send>;

/// Read-only view shared by [`Cache`](crate::cache::Cache) and
/// [`ConcurrentCache`](crate::sync::ConcurrentCache).
///
/// # Example
///
/// ```
/// use evictkit::builder::{CacheBuilder, CachePolicy};
/// use evictkit::traits::ReadOnlyCache;
///
/// fn fill_ratio<C: ReadOnlyCache<u32>>(cache: &C) -> f64 {
///     cache.len() as f64 / cache.capacity() as f64
/// }
///
/// let mut cache = CacheBuilder::new(4).build::<u32, u32>(CachePolicy::Lru).unwrap();
/// cache.put(1, 1);
/// assert_eq!(fill_ratio(&cache), 0.25);
/// ```
pub trait ReadOnlyCache<K> {
    /// Checks residency without touching metadata or policy state.
    fn contains(&self, key: &K) -> bool;

    /// Current number of resident keys.
    fn len(&self) -> usize;

    /// Returns `true` if no key is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of resident keys.
    fn capacity(&self) -> usize;
}
