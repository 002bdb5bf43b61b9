//! Thread-safe cache handle.
//!
//! [`ConcurrentCache`] puts a [`Cache`] behind a single `parking_lot::Mutex`.
//! Storage and policy bookkeeping are mutated together under that one lock,
//! so a reader on another thread never sees a key that one side knows about
//! and the other does not. Even `get` takes the lock exclusively, since a hit
//! updates entry metadata and the policy's ordering.
//!
//! Cloning the handle shares the same cache.
//!
//! ## Example
//!
//! ```
//! use std::thread;
//!
//! use evictkit::policy::lru::LruPolicy;
//! use evictkit::sync::ConcurrentCache;
//!
//! let cache = ConcurrentCache::new(128, LruPolicy::new()).unwrap();
//!
//! let handles: Vec<_> = (0..4u64)
//!     .map(|t| {
//!         let cache = cache.clone();
//!         thread::spawn(move || {
//!             for i in 0..32 {
//!                 cache.put(t * 100 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert_eq!(cache.len(), 128);
//! assert_eq!(cache.get(&305), Some(5));
//! ```

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::Cache;
use crate::error::ConfigError;
use crate::metrics::CacheMetricsSnapshot;
use crate::traits::{DynPolicy, EvictionPolicy, ReadOnlyCache};

/// Shared, lock-protected cache handle.
pub struct ConcurrentCache<K, V, P = DynPolicy<K>> {
    inner: Arc<Mutex<Cache<K, V, P>>>,
}

impl<K, V, P> Clone for ConcurrentCache<K, V, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, P> ConcurrentCache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
{
    /// Creates a concurrent cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Same as [`Cache::new`].
    pub fn new(capacity: usize, policy: P) -> Result<Self, ConfigError> {
        Ok(Self::from_cache(Cache::new(capacity, policy)?))
    }

    /// Wraps an existing cache, for example one made by
    /// [`CacheBuilder`](crate::builder::CacheBuilder).
    pub fn from_cache(cache: Cache<K, V, P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Gets a cloned value by key, recording the access.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Gets a value by key and applies `f` to it under the lock.
    ///
    /// ```
    /// use evictkit::policy::fifo::FifoPolicy;
    /// use evictkit::sync::ConcurrentCache;
    ///
    /// let cache = ConcurrentCache::new(4, FifoPolicy::new()).unwrap();
    /// cache.put("key", vec![1, 2, 3]);
    /// assert_eq!(cache.get_with(&"key", |v| v.len()), Some(3));
    /// ```
    pub fn get_with<F, R>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    /// Reads a cloned value without touching metadata or the policy.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// Inserts or overwrites `key`. Returns the previous value on overwrite.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().put(key, value)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn metrics(&self) -> CacheMetricsSnapshot {
        self.inner.lock().metrics()
    }

    /// Runs `f` with exclusive access to the cache, for compound operations
    /// that must not interleave with other threads.
    ///
    /// ```
    /// use evictkit::policy::lru::LruPolicy;
    /// use evictkit::sync::ConcurrentCache;
    ///
    /// let cache = ConcurrentCache::new(8, LruPolicy::new()).unwrap();
    /// let ok = cache.with(|c| {
    ///     if c.get(&"counter").is_none() {
    ///         c.put("counter", 0);
    ///     }
    ///     c.check_invariants().is_ok()
    /// });
    /// assert!(ok);
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cache<K, V, P>) -> R,
    {
        f(&mut self.inner.lock())
    }
}

impl<K, V, P> ReadOnlyCache<K> for ConcurrentCache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
{
    fn contains(&self, key: &K) -> bool {
        ConcurrentCache::contains(self, key)
    }

    fn len(&self) -> usize {
        ConcurrentCache::len(self)
    }

    fn capacity(&self) -> usize {
        ConcurrentCache::capacity(self)
    }
}

impl<K, V, P> fmt::Debug for ConcurrentCache<K, V, P>
where
    P: EvictionPolicy<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(cache) => f
                .debug_struct("ConcurrentCache")
                .field("inner", &*cache)
                .finish(),
            None => f
                .debug_struct("ConcurrentCache")
                .field("inner", &"<locked>")
                .finish(),
        }
    }
}
