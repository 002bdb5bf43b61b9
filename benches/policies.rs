//! Throughput benchmarks across every eviction policy.
//!
//! Each policy is built through `CacheBuilder`, so the numbers include the
//! boxed-policy dispatch a runtime-selected cache pays.

use std::hint::black_box;
use std::time::Instant;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use evictkit::builder::{CacheBuilder, CachePolicy};
use evictkit::cache::Cache;

const CAPACITY: usize = 4096;
const OPS: u64 = 100_000;

fn policies() -> Vec<CachePolicy> {
    CachePolicy::all()
        .into_iter()
        .map(|p| match p {
            CachePolicy::Random { .. } => CachePolicy::Random { seed: Some(1) },
            other => other,
        })
        .collect()
}

fn filled(policy: CachePolicy) -> Cache<u64, u64> {
    let mut cache = CacheBuilder::new(CAPACITY)
        .build::<u64, u64>(policy)
        .expect("non-zero capacity");
    for i in 0..CAPACITY as u64 {
        cache.put(i, i);
    }
    cache
}

/// Keys with a 20% hot set receiving 80% of accesses.
fn hotset_keys(n: u64, universe: u64, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let hot = (universe / 5).max(1);
    (0..n)
        .map(|_| {
            if rng.random_bool(0.8) {
                rng.random_range(0..hot)
            } else {
                rng.random_range(hot..universe)
            }
        })
        .collect()
}

// =============================================================================
// Get (cache hit)
// =============================================================================

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");
    group.throughput(Throughput::Elements(OPS));

    for policy in policies() {
        group.bench_function(BenchmarkId::from_parameter(policy), |b| {
            b.iter_custom(|iters| {
                let mut cache = filled(policy);
                let start = Instant::now();
                for _ in 0..iters {
                    for i in 0..OPS {
                        black_box(cache.get(&(i % CAPACITY as u64)));
                    }
                }
                start.elapsed()
            })
        });
    }

    group.finish();
}

// =============================================================================
// Insert with eviction
// =============================================================================

fn bench_insert_evict(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_evict");
    group.throughput(Throughput::Elements(OPS));

    for policy in policies() {
        group.bench_function(BenchmarkId::from_parameter(policy), |b| {
            b.iter_custom(|iters| {
                let mut cache = filled(policy);
                let mut next = CAPACITY as u64;
                let start = Instant::now();
                for _ in 0..iters {
                    for _ in 0..OPS {
                        cache.put(black_box(next), next);
                        next += 1;
                    }
                }
                start.elapsed()
            })
        });
    }

    group.finish();
}

// =============================================================================
// Mixed read-through workload
// =============================================================================

fn bench_hotset(c: &mut Criterion) {
    let mut group = c.benchmark_group("hotset_read_through");
    group.throughput(Throughput::Elements(OPS));
    let keys = hotset_keys(OPS, CAPACITY as u64 * 4, 42);

    for policy in policies() {
        group.bench_with_input(BenchmarkId::from_parameter(policy), &keys, |b, keys| {
            b.iter_custom(|iters| {
                let mut cache = filled(policy);
                let start = Instant::now();
                for _ in 0..iters {
                    for &key in keys {
                        if cache.get(&key).is_none() {
                            cache.put(key, key);
                        }
                    }
                }
                start.elapsed()
            })
        });
    }

    group.finish();
}

criterion_group!(policies_group, bench_get_hit, bench_insert_evict, bench_hotset);
criterion_main!(policies_group);
