//! evictkit: a bounded in-memory cache with pluggable eviction policies.
//!
//! A [`Cache`](cache::Cache) owns the values and their bookkeeping; an
//! [`EvictionPolicy`](traits::EvictionPolicy) owns only keys and decides
//! which one leaves when the cache is full. Policies: LRU, LFU, FIFO, LIFO,
//! MRU, Random, Round-Robin and 2Q.
//!
//! ```
//! use evictkit::prelude::*;
//!
//! let mut cache = Cache::new(2, LruPolicy::new()).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3);
//! assert!(!cache.contains(&"b"));
//! ```

pub mod builder;
pub mod cache;
pub mod ds;
pub mod error;
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod sync;
pub mod traits;
