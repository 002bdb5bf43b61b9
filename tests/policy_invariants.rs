// ==============================================
// CROSS-POLICY INVARIANT TESTS (integration)
// ==============================================
//
// Tests that verify library-wide behavioral consistency across all eviction
// policies. These span the cache, the builder and every policy module, so
// they live here rather than in any single source file.

use evictkit::builder::{CacheBuilder, CachePolicy};
use evictkit::cache::Cache;
use evictkit::policy::fifo::FifoPolicy;
use evictkit::policy::lfu::LfuPolicy;
use evictkit::policy::lifo::LifoPolicy;
use evictkit::policy::lru::LruPolicy;
use evictkit::policy::mru::MruPolicy;
use evictkit::policy::random::RandomPolicy;
use evictkit::policy::round_robin::RoundRobinPolicy;
use evictkit::policy::two_q::TwoQPolicy;
use evictkit::traits::{DynPolicy, EvictionPolicy};

/// Every policy, seeded where it matters.
fn all_policies() -> Vec<CachePolicy> {
    CachePolicy::all()
        .into_iter()
        .map(|p| match p {
            CachePolicy::Random { .. } => CachePolicy::Random { seed: Some(0xC0FFEE) },
            other => other,
        })
        .collect()
}

fn boxed_policy(policy: CachePolicy, capacity: usize) -> DynPolicy<u32> {
    match policy {
        CachePolicy::Lru => Box::new(LruPolicy::new()),
        CachePolicy::Lfu => Box::new(LfuPolicy::new()),
        CachePolicy::Fifo => Box::new(FifoPolicy::new()),
        CachePolicy::Lifo => Box::new(LifoPolicy::new()),
        CachePolicy::Mru => Box::new(MruPolicy::new()),
        CachePolicy::Random { seed } => Box::new(RandomPolicy::with_seed(seed.unwrap_or(0))),
        CachePolicy::RoundRobin => Box::new(RoundRobinPolicy::new()),
        CachePolicy::TwoQ { .. } => Box::new(TwoQPolicy::new(capacity)),
    }
}

// ==============================================
// Construction
// ==============================================

mod construction {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected_for_every_policy() {
        for policy in all_policies() {
            assert!(
                CacheBuilder::new(0).build::<u32, u32>(policy).is_err(),
                "{policy} accepted capacity 0"
            );
            assert!(Cache::<u32, u32>::new(0, boxed_policy(policy, 1)).is_err());
        }
    }

    #[test]
    fn capacity_one_works_for_every_policy() {
        for policy in all_policies() {
            let mut cache = CacheBuilder::new(1).build::<u32, u32>(policy).unwrap();
            for i in 0..10 {
                cache.put(i, i);
                assert_eq!(cache.len(), 1, "{policy}");
                assert_eq!(cache.get(&i), Some(&i), "{policy}");
            }
            cache.check_invariants().unwrap();
        }
    }

    #[test]
    fn miss_is_none_for_every_policy() {
        for policy in all_policies() {
            let mut cache = CacheBuilder::new(2).build::<u32, u32>(policy).unwrap();
            assert_eq!(cache.get(&7), None);
            assert_eq!(cache.metrics().get_misses, 1);
            assert!(cache.policy().is_empty());
        }
    }
}

// ==============================================
// Capacity Invariant
// ==============================================

mod capacity {
    use super::*;

    #[test]
    fn size_never_exceeds_capacity() {
        for policy in all_policies() {
            for capacity in [1usize, 2, 3, 7, 16] {
                let mut cache = CacheBuilder::new(capacity)
                    .build::<u32, u32>(policy)
                    .unwrap();
                for i in 0..200u32 {
                    cache.put(i % 37, i);
                    if i % 3 == 0 {
                        cache.get(&(i % 11));
                    }
                    assert!(cache.size() <= capacity, "{policy} at capacity {capacity}");
                }
                assert_eq!(cache.size(), capacity);
                cache.check_invariants().unwrap();
            }
        }
    }
}

// ==============================================
// Per-Policy Orderings
// ==============================================

mod orderings {
    use super::*;

    #[test]
    fn lru_evicts_least_recently_used() {
        let mut cache = CacheBuilder::new(3)
            .build::<&str, u32>(CachePolicy::Lru)
            .unwrap();
        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);
        cache.get(&"A");
        cache.put("D", 4);

        assert_eq!(cache.get(&"B"), None);
        assert_eq!(cache.get(&"A"), Some(&1));
        assert_eq!(cache.get(&"C"), Some(&3));
        assert_eq!(cache.get(&"D"), Some(&4));
    }

    #[test]
    fn lfu_evicts_from_minimum_bucket() {
        let mut cache = Cache::new(3, LfuPolicy::new()).unwrap();
        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);
        cache.get(&"A");
        cache.get(&"A");
        assert_eq!(cache.policy().frequency(&"A"), Some(3));

        cache.put("D", 4);
        assert!(cache.contains(&"A"));
        assert!(!cache.contains(&"B"), "oldest frequency-1 key goes first");
        assert!(cache.contains(&"C"));
        assert_eq!(cache.policy().min_frequency(), Some(1));
    }

    #[test]
    fn fifo_evicts_by_arrival_only() {
        let mut cache = CacheBuilder::new(3)
            .build::<&str, u32>(CachePolicy::Fifo)
            .unwrap();
        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);
        for _ in 0..5 {
            cache.get(&"A");
        }
        cache.put("D", 4);
        assert!(!cache.contains(&"A"));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn lifo_evicts_newest_arrival() {
        let mut cache = CacheBuilder::new(3)
            .build::<&str, u32>(CachePolicy::Lifo)
            .unwrap();
        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);
        cache.put("D", 4);
        assert!(!cache.contains(&"C"));
        cache.put("E", 5);
        assert!(!cache.contains(&"D"));
        assert!(cache.contains(&"A"));
    }

    #[test]
    fn mru_evicts_most_recently_touched() {
        let mut cache = CacheBuilder::new(3)
            .build::<&str, u32>(CachePolicy::Mru)
            .unwrap();
        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);
        cache.get(&"B");
        cache.put("D", 4);
        assert!(!cache.contains(&"B"));
        assert!(cache.contains(&"C"));
    }

    #[test]
    fn round_robin_rotates_fairly() {
        let mut cache = Cache::new(3, RoundRobinPolicy::new()).unwrap();
        cache.put(0u32, ());
        cache.put(1, ());
        cache.put(2, ());

        let mut last_victim = None;
        for (i, newcomer) in (3u32..15).enumerate() {
            let before: Vec<u32> = (0..15).filter(|k| cache.contains(k)).collect();
            cache.put(newcomer, ());
            let victim = before
                .into_iter()
                .find(|k| !cache.contains(k))
                .expect("one key evicted");
            // A, B, C, then the newcomers in the order they arrived
            assert_eq!(victim, i as u32);
            assert_ne!(Some(victim), last_victim);
            last_victim = Some(victim);
        }
    }

    #[test]
    fn seeded_random_is_reproducible_through_builder() {
        let survivors = || {
            let mut cache = CacheBuilder::new(5)
                .build::<u32, u32>(CachePolicy::Random { seed: Some(11) })
                .unwrap();
            for i in 0..50 {
                cache.put(i, i);
            }
            (0..50).filter(|k| cache.contains(k)).collect::<Vec<_>>()
        };
        assert_eq!(survivors(), survivors());
    }
}

// ==============================================
// 2Q Scan Resistance
// ==============================================

mod two_q_scan {
    use super::*;

    #[test]
    fn scan_never_promotes_and_hot_key_survives() {
        let mut cache = Cache::new(4, TwoQPolicy::new(4)).unwrap();
        assert_eq!(cache.policy().probation_bound(), 1);

        cache.put(u32::MAX, "hot");
        cache.get(&u32::MAX);
        assert!(cache.policy().in_protected(&u32::MAX));

        for key in 0..1_000u32 {
            cache.put(key, "scan");
            assert!(!cache.policy().in_protected(&key), "scan key {key} promoted");
            assert!(cache.contains(&u32::MAX), "hot key evicted at scan key {key}");
        }
        assert_eq!(cache.policy().protected_len(), 1);
        cache.check_invariants().unwrap();
        cache.policy().check_invariants().unwrap();
    }

    #[test]
    fn policy_sized_for_another_capacity_is_rescaled_by_the_cache() {
        let mut cache = Cache::new(4, TwoQPolicy::new(100)).unwrap();
        assert_eq!(cache.policy().probation_bound(), 1);
        assert_eq!(cache.policy().ghost_bound(), 2);

        cache.put(u32::MAX, "hot");
        cache.get(&u32::MAX);
        for key in 0..10u32 {
            cache.put(key, "scan");
            assert!(cache.contains(&u32::MAX), "hot key evicted at scan key {key}");
        }
        cache.policy().check_invariants().unwrap();
    }

    #[test]
    fn boxed_policy_is_rescaled_too() {
        let policy: DynPolicy<u32> = Box::new(TwoQPolicy::new(1_000));
        let mut cache: Cache<u32, &str> = Cache::new(64, policy).unwrap();

        for hot in 0..8u32 {
            cache.put(hot, "hot");
            cache.get(&hot);
        }
        for key in 100..1_000u32 {
            cache.put(key, "scan");
        }
        for hot in 0..8u32 {
            assert!(cache.contains(&hot), "hot key {hot} lost to scan");
        }
    }

    #[test]
    fn lru_does_not_resist_the_same_scan() {
        let mut cache = Cache::new(4, LruPolicy::new()).unwrap();
        cache.put(u32::MAX, "hot");
        cache.get(&u32::MAX);
        for key in 0..4u32 {
            cache.put(key, "scan");
        }
        assert!(!cache.contains(&u32::MAX));
    }
}

// ==============================================
// Idempotent Overwrite
// ==============================================

mod overwrite {
    use super::*;

    /// Wraps a policy and counts `on_get` / `on_put` calls.
    struct Counting {
        inner: DynPolicy<u32>,
        gets: usize,
        puts: usize,
    }

    impl EvictionPolicy<u32> for Counting {
        fn on_get(&mut self, key: &u32) {
            self.gets += 1;
            self.inner.on_get(key);
        }

        fn on_put(&mut self, key: &u32) {
            self.puts += 1;
            self.inner.on_put(key);
        }

        fn evict(&mut self) -> Option<u32> {
            self.inner.evict()
        }

        fn remove(&mut self, key: &u32) {
            self.inner.remove(key);
        }

        fn set_capacity(&mut self, capacity: usize) {
            self.inner.set_capacity(capacity);
        }

        fn len(&self) -> usize {
            self.inner.len()
        }

        fn contains(&self, key: &u32) -> bool {
            self.inner.contains(key)
        }

        fn clear(&mut self) {
            self.inner.clear();
        }

        fn name(&self) -> &'static str {
            self.inner.name()
        }
    }

    #[test]
    fn overwrite_keeps_size_and_skips_hooks() {
        for policy in all_policies() {
            let counting = Counting {
                inner: boxed_policy(policy, 4),
                gets: 0,
                puts: 0,
            };
            let mut cache = Cache::new(4, counting).unwrap();
            cache.put(1, 10);
            cache.put(2, 20);
            let before = cache.metadata(&1).unwrap();

            assert_eq!(cache.put(1, 11), Some(10), "{policy}");
            assert_eq!(cache.size(), 2, "{policy}");
            assert_eq!(cache.policy().gets, 0, "{policy}: overwrite ran on_get");
            assert_eq!(cache.policy().puts, 2, "{policy}: overwrite ran on_put");

            let after = cache.metadata(&1).unwrap();
            assert_eq!(after.access_count, before.access_count, "{policy}");
            assert!(after.updated_at >= before.updated_at);
            assert_eq!(after.inserted_at, before.inserted_at);

            assert_eq!(cache.get(&1), Some(&11), "{policy}");
            assert_eq!(cache.policy().gets, 1, "{policy}");
        }
    }

    #[test]
    fn lru_overwrite_does_not_refresh_recency() {
        let mut cache = Cache::new(2, LruPolicy::new()).unwrap();
        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("A", 3);
        cache.put("C", 4);
        assert!(!cache.contains(&"A"));
    }

    #[test]
    fn lfu_overwrite_does_not_bump_frequency() {
        let mut cache = Cache::new(2, LfuPolicy::new()).unwrap();
        cache.put("A", 1);
        cache.put("A", 2);
        cache.put("A", 3);
        assert_eq!(cache.policy().frequency(&"A"), Some(1));
    }
}

// ==============================================
// Property Tests
// ==============================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Operation {
        Put(u32, u32),
        Get(u32),
        Remove(u32),
    }

    fn operation_strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            4 => (0u32..40, 0u32..100).prop_map(|(k, v)| Operation::Put(k, v)),
            3 => (0u32..40).prop_map(Operation::Get),
            1 => (0u32..40).prop_map(Operation::Remove),
        ]
    }

    fn policy_strategy() -> impl Strategy<Value = CachePolicy> {
        prop::sample::select(all_policies())
    }

    proptest! {
        /// len() never exceeds capacity under put-only workloads.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_len_within_capacity(
            policy in policy_strategy(),
            capacity in 1usize..20,
            keys in prop::collection::vec(0u32..200, 0..300)
        ) {
            let mut cache = CacheBuilder::new(capacity).build::<u32, u32>(policy).unwrap();
            for key in keys {
                cache.put(key, key);
                prop_assert!(cache.len() <= capacity);
            }
        }

        /// Storage and policy track the same keys after any operation mix.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_storage_and_policy_agree(
            policy in policy_strategy(),
            capacity in 1usize..16,
            ops in prop::collection::vec(operation_strategy(), 0..250)
        ) {
            let mut cache = CacheBuilder::new(capacity).build::<u32, u32>(policy).unwrap();
            for op in ops {
                match op {
                    Operation::Put(k, v) => { cache.put(k, v); }
                    Operation::Get(k) => { cache.get(&k); }
                    Operation::Remove(k) => { cache.remove(&k); }
                }
                prop_assert!(cache.len() <= capacity);
                prop_assert_eq!(cache.len(), cache.policy().len());
                prop_assert!(cache.check_invariants().is_ok(), "{:?}", cache.check_invariants());
            }
        }

        /// The most recent put is always readable right after it.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_put_then_get(
            policy in policy_strategy(),
            capacity in 1usize..8,
            keys in prop::collection::vec(0u32..30, 1..100)
        ) {
            let mut cache = CacheBuilder::new(capacity).build::<u32, u32>(policy).unwrap();
            for (i, key) in keys.into_iter().enumerate() {
                cache.put(key, i as u32);
                prop_assert_eq!(cache.get(&key), Some(&(i as u32)));
            }
        }

        /// 2Q queues stay disjoint and the ghost list stays bounded.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_two_q_queues_consistent(
            capacity in 1usize..16,
            ops in prop::collection::vec(operation_strategy(), 0..250)
        ) {
            let mut cache = Cache::new(capacity, TwoQPolicy::new(capacity)).unwrap();
            for op in ops {
                match op {
                    Operation::Put(k, v) => { cache.put(k, v); }
                    Operation::Get(k) => { cache.get(&k); }
                    Operation::Remove(k) => { cache.remove(&k); }
                }
                prop_assert!(cache.policy().check_invariants().is_ok());
                prop_assert!(cache.policy().ghost_len() <= cache.policy().ghost_bound());
            }
        }

        /// LFU bucket bookkeeping matches the per-key frequencies.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_lfu_buckets_consistent(
            capacity in 1usize..16,
            ops in prop::collection::vec(operation_strategy(), 0..250)
        ) {
            let mut cache = Cache::new(capacity, LfuPolicy::new()).unwrap();
            for op in ops {
                match op {
                    Operation::Put(k, v) => { cache.put(k, v); }
                    Operation::Get(k) => { cache.get(&k); }
                    Operation::Remove(k) => { cache.remove(&k); }
                }
                prop_assert!(cache.policy().check_invariants().is_ok());
            }
        }
    }
}
