//! Runtime policy selection.
//!
//! [`CacheBuilder`] turns a [`CachePolicy`] value into a [`Cache`] whose
//! policy is boxed behind [`DynPolicy`], so the policy can be chosen from
//! configuration or a command line without changing the cache's type.
//!
//! ## Example
//!
//! ```rust
//! use evictkit::builder::{CacheBuilder, CachePolicy};
//! use evictkit::traits::EvictionPolicy;
//!
//! let policy: CachePolicy = "2q".parse().unwrap();
//! let mut cache = CacheBuilder::new(100).build::<u64, String>(policy).unwrap();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! assert_eq!(cache.policy().name(), "2q");
//! ```

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::cache::Cache;
use crate::error::ConfigError;
use crate::policy::fifo::FifoPolicy;
use crate::policy::lfu::LfuPolicy;
use crate::policy::lifo::LifoPolicy;
use crate::policy::lru::LruPolicy;
use crate::policy::mru::MruPolicy;
use crate::policy::random::RandomPolicy;
use crate::policy::round_robin::RoundRobinPolicy;
use crate::policy::two_q::{DEFAULT_A1IN_FRAC, DEFAULT_A1OUT_FRAC, TwoQPolicy};
use crate::traits::DynPolicy;

/// Available cache eviction policies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CachePolicy {
    /// Least Recently Used eviction.
    Lru,
    /// Least Frequently Used eviction (bucket-based, FIFO within a bucket).
    Lfu,
    /// First In, First Out eviction.
    Fifo,
    /// Last In, First Out eviction.
    Lifo,
    /// Most Recently Used eviction.
    Mru,
    /// Uniform random eviction. `None` seeds from the thread RNG.
    Random { seed: Option<u64> },
    /// Rotating cursor over admission order.
    RoundRobin,
    /// Two-queue scan-resistant policy.
    TwoQ { a1in_frac: f64, a1out_frac: f64 },
}

impl CachePolicy {
    /// 2Q with the default 25% probation and 50% ghost ratios.
    pub fn two_q() -> Self {
        CachePolicy::TwoQ {
            a1in_frac: DEFAULT_A1IN_FRAC,
            a1out_frac: DEFAULT_A1OUT_FRAC,
        }
    }

    /// The name the built policy reports through `EvictionPolicy::name`.
    pub fn name(&self) -> &'static str {
        match self {
            CachePolicy::Lru => "lru",
            CachePolicy::Lfu => "lfu",
            CachePolicy::Fifo => "fifo",
            CachePolicy::Lifo => "lifo",
            CachePolicy::Mru => "mru",
            CachePolicy::Random { .. } => "random",
            CachePolicy::RoundRobin => "round-robin",
            CachePolicy::TwoQ { .. } => "2q",
        }
    }

    /// Every policy with default parameters, in a stable order.
    pub fn all() -> [CachePolicy; 8] {
        [
            CachePolicy::Lru,
            CachePolicy::Lfu,
            CachePolicy::Fifo,
            CachePolicy::Lifo,
            CachePolicy::Mru,
            CachePolicy::Random { seed: None },
            CachePolicy::RoundRobin,
            CachePolicy::two_q(),
        ]
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CachePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(CachePolicy::Lru),
            "lfu" => Ok(CachePolicy::Lfu),
            "fifo" => Ok(CachePolicy::Fifo),
            "lifo" => Ok(CachePolicy::Lifo),
            "mru" => Ok(CachePolicy::Mru),
            "random" => Ok(CachePolicy::Random { seed: None }),
            "round-robin" | "rr" => Ok(CachePolicy::RoundRobin),
            "2q" | "two-q" => Ok(CachePolicy::two_q()),
            other => Err(ConfigError::new(format!("unknown cache policy `{other}`"))),
        }
    }
}

/// Builder for creating cache instances.
#[derive(Debug, Clone, Copy)]
pub struct CacheBuilder {
    capacity: usize,
}

impl CacheBuilder {
    /// Create a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Build a cache with the specified policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero capacity or invalid 2Q ratios.
    ///
    /// # Example
    ///
    /// ```rust
    /// use evictkit::builder::{CacheBuilder, CachePolicy};
    ///
    /// let lru = CacheBuilder::new(100).build::<u64, String>(CachePolicy::Lru).unwrap();
    /// let seeded = CacheBuilder::new(100)
    ///     .build::<u64, String>(CachePolicy::Random { seed: Some(7) })
    ///     .unwrap();
    /// assert_eq!(lru.capacity(), seeded.capacity());
    ///
    /// let bad = CachePolicy::TwoQ { a1in_frac: 2.0, a1out_frac: 0.5 };
    /// assert!(CacheBuilder::new(100).build::<u64, String>(bad).is_err());
    /// ```
    pub fn build<K, V>(self, policy: CachePolicy) -> Result<Cache<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash + Send + 'static,
    {
        if self.capacity == 0 {
            return Err(ConfigError::zero_capacity());
        }
        let capacity = self.capacity;
        let boxed: DynPolicy<K> = match policy {
            CachePolicy::Lru => Box::new(LruPolicy::with_capacity(capacity)),
            CachePolicy::Lfu => Box::new(LfuPolicy::with_capacity(capacity)),
            CachePolicy::Fifo => Box::new(FifoPolicy::with_capacity(capacity)),
            CachePolicy::Lifo => Box::new(LifoPolicy::with_capacity(capacity)),
            CachePolicy::Mru => Box::new(MruPolicy::with_capacity(capacity)),
            CachePolicy::Random { seed: Some(seed) } => Box::new(RandomPolicy::with_seed(seed)),
            CachePolicy::Random { seed: None } => Box::new(RandomPolicy::new()),
            CachePolicy::RoundRobin => Box::new(RoundRobinPolicy::with_capacity(capacity)),
            CachePolicy::TwoQ {
                a1in_frac,
                a1out_frac,
            } => Box::new(TwoQPolicy::with_ratios(capacity, a1in_frac, a1out_frac)?),
        };
        Cache::new(capacity, boxed)
    }
}
